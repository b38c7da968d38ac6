#[cfg(test)]
mod tests {
    use crate::api::v1::backendconfig::parse_backend_config;
    use crate::composite::BackendService;
    use crate::features::ensure_cdn;
    use crate::util::service_port::{parse_backend_port, ServicePort};
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    fn service_port(manifest: &str) -> ServicePort {
        let config = parse_backend_config(manifest).unwrap();
        ServicePort::with_backend_config(config, parse_backend_port("http")).unwrap()
    }

    #[test]
    fn cache_policy_from_manifest_is_written_to_backend() {
        let sp = service_port(
            r#"
apiVersion: cloud.google.com/v1
kind: BackendConfig
metadata:
  name: storefront
  namespace: shop
spec:
  cdn:
    enabled: true
    cachePolicy:
      includeHost: true
      includeProtocol: false
      includeQueryString: false
"#,
        );
        let mut be = BackendService::from_json(
            r#"{
                "name": "k8s1-shop-storefront-80",
                "enableCDN": true,
                "cdnPolicy": {
                    "cacheKeyPolicy": {
                        "includeHost": false,
                        "includeProtocol": true,
                        "includeQueryString": true
                    }
                }
            }"#,
        )
        .unwrap();

        assert!(ensure_cdn(&sp, &mut be));
        assert_json_eq!(
            serde_json::to_value(&be).unwrap(),
            json!({
                "name": "k8s1-shop-storefront-80",
                "enableCDN": true,
                "cdnPolicy": {
                    "cacheKeyPolicy": {
                        "includeHost": true,
                        "includeProtocol": false,
                        "includeQueryString": false
                    }
                }
            })
        );
        assert!(!ensure_cdn(&sp, &mut be));
    }

    #[test]
    fn enabling_cdn_leaves_existing_cache_policy() {
        let sp = service_port(
            r#"
apiVersion: cloud.google.com/v1
kind: BackendConfig
metadata:
  name: storefront
  namespace: shop
spec:
  cdn:
    enabled: true
"#,
        );
        let mut be = BackendService::from_json(
            r#"{
                "name": "k8s1-shop-storefront-80",
                "enableCDN": false,
                "cdnPolicy": { "cacheKeyPolicy": { "includeQueryString": true } }
            }"#,
        )
        .unwrap();

        assert!(ensure_cdn(&sp, &mut be));
        assert_json_eq!(
            serde_json::to_value(&be).unwrap(),
            json!({
                "name": "k8s1-shop-storefront-80",
                "enableCDN": true,
                "cdnPolicy": {
                    "cacheKeyPolicy": {
                        "includeHost": false,
                        "includeProtocol": false,
                        "includeQueryString": true
                    }
                }
            })
        );
    }

    #[test]
    fn all_false_policy_does_not_create_cdn_policy() {
        let sp = service_port(
            r#"
apiVersion: cloud.google.com/v1
kind: BackendConfig
metadata:
  name: storefront
  namespace: shop
spec:
  cdn:
    enabled: false
    cachePolicy: {}
"#,
        );
        let mut be = BackendService::from_json(r#"{ "name": "k8s1-shop-storefront-80" }"#).unwrap();

        assert!(!ensure_cdn(&sp, &mut be));
        assert_json_eq!(
            serde_json::to_value(&be).unwrap(),
            json!({
                "name": "k8s1-shop-storefront-80",
                "enableCDN": false
            })
        );
    }

    #[test]
    fn manifest_without_cdn_never_updates() {
        let sp = service_port(
            r#"
apiVersion: cloud.google.com/v1
kind: BackendConfig
metadata:
  name: storefront
  namespace: shop
spec: {}
"#,
        );
        let body = r#"{
            "name": "k8s1-shop-storefront-80",
            "enableCDN": true,
            "cdnPolicy": { "cacheKeyPolicy": { "includeHost": true } }
        }"#;
        let mut be = BackendService::from_json(body).unwrap();

        assert!(!ensure_cdn(&sp, &mut be));
        assert_eq!(be, BackendService::from_json(body).unwrap());
    }
}
