//! Annotation keys shared by dashboard-managed resources

/// Human readable name
pub const DISPLAY_NAME: &str = "openshift.io/display-name";

/// Free-form description
pub const DESCRIPTION: &str = "openshift.io/description";

/// Inverted enablement flag, `"true"` or `"false"`
pub const DISABLED: &str = "opendatahub.io/disabled";

/// RFC 3339 timestamp of the last edit made through the dashboard
pub const MODIFIED_DATE: &str = "opendatahub.io/modified-date";

/// JSON encoded list of dashboard areas the resource is offered in
pub const DASHBOARD_FEATURE_VISIBILITY: &str = "opendatahub.io/dashboard-feature-visibility";
