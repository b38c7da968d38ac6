use ingress_backends::api::v1::backendconfig::BackendConfig;
use kube::CustomResourceExt as _;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&BackendConfig::crd())?);
    Ok(())
}
