//! Unit tests for container discovery and log downloads

#[cfg(test)]
mod tests {
    use crate::error::K8sApiError;
    use crate::pods::*;
    use k8s_openapi::api::core::v1::{Container, Pod, PodSpec};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    const NAMESPACE: &str = "ds-project";
    const POD: &str = "iris-run-abc";

    fn container(name: &str) -> Container {
        Container {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn pod(init: &[&str], containers: &[&str]) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(POD.to_string()),
                namespace: Some(NAMESPACE.to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                init_containers: if init.is_empty() {
                    None
                } else {
                    Some(init.iter().map(|n| container(n)).collect())
                },
                containers: containers.iter().map(|n| container(n)).collect(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_pod_containers_lists_init_containers_first() {
        let containers = pod_containers(&pod(&["kfp-launcher"], &["wait", "main"]));
        assert_eq!(containers, vec!["kfp-launcher", "wait", "main"]);
    }

    #[test]
    fn test_pod_containers_without_spec_is_empty() {
        assert!(pod_containers(&Pod::default()).is_empty());
    }

    #[test]
    fn test_default_container_prefers_main() {
        let containers = vec!["wait".to_string(), "main".to_string()];
        assert_eq!(default_container(&containers), Some("main"));

        let containers = vec!["wait".to_string(), "sidecar".to_string()];
        assert_eq!(default_container(&containers), Some("wait"));

        assert_eq!(default_container(&[]), None);
    }

    #[tokio::test]
    async fn test_fetch_logs_passes_tail() {
        let client = MockPodLogClient::new();
        client.set_logs(NAMESPACE, POD, "main", "one\ntwo\nthree\n");

        let logs = fetch_logs(&client, NAMESPACE, POD, "main", Some(2)).await.unwrap();
        assert_eq!(logs, "two\nthree\n");
        assert_eq!(client.log_requests(), vec![("main".to_string(), Some(2))]);
    }

    #[tokio::test]
    async fn test_download_full_pod_log() {
        let client = MockPodLogClient::new();
        client.set_logs(NAMESPACE, POD, "main", "epoch 1\nepoch 2\n");

        let download = download_full_pod_log(&client, NAMESPACE, POD, "main").await.unwrap();
        assert_eq!(download.file_name, "iris-run-abc-main.log");
        assert_eq!(download.content, "epoch 1\nepoch 2\n");
        assert_eq!(client.log_requests(), vec![("main".to_string(), None)], "Downloads are never tailed");
    }

    #[tokio::test]
    async fn test_download_all_step_logs_adds_headers() {
        let client = MockPodLogClient::new();
        client.set_logs(NAMESPACE, POD, "kfp-launcher", "copied launcher");
        client.set_logs(NAMESPACE, POD, "main", "training\n");
        let containers = vec!["kfp-launcher".to_string(), "main".to_string()];

        let download = download_all_step_logs(&client, &containers, NAMESPACE, POD).await.unwrap();
        assert_eq!(download.file_name, "iris-run-abc-all-steps.log");
        assert_eq!(download.content, "step-kfp-launcher\ncopied launcher\nstep-main\ntraining\n");
    }

    #[tokio::test]
    async fn test_download_all_step_logs_fails_on_missing_container() {
        let client = MockPodLogClient::new();
        client.set_logs(NAMESPACE, POD, "main", "training\n");
        let containers = vec!["main".to_string(), "wait".to_string()];

        let result = download_all_step_logs(&client, &containers, NAMESPACE, POD).await;
        assert!(matches!(result, Err(K8sApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mock_get_pod() {
        let client = MockPodLogClient::new();
        client.add_pod(NAMESPACE, pod(&[], &["main"]));

        let fetched = client.get_pod(NAMESPACE, POD).await.unwrap();
        assert_eq!(pod_containers(&fetched), vec!["main"]);
        assert!(matches!(client.get_pod(NAMESPACE, "missing").await, Err(K8sApiError::NotFound(_))));
    }
}
