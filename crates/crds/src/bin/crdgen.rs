//! Prints the CRD manifests as YAML, one document per resource.

use crds::HardwareProfile;
use kube::CustomResourceExt;

fn main() -> Result<(), serde_yaml::Error> {
    print!("---\n{}", serde_yaml::to_string(&HardwareProfile::crd())?);
    Ok(())
}
