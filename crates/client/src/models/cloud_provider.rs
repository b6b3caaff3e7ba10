//! Cloud provider selection for RKE clusters.

use super::{AwsCloudProvider, AzureCloudProvider, OpenstackCloudProvider, VsphereCloudProvider};

record! {
    /// Named cloud provider with at most one provider-specific section set.
    pub struct CloudProvider => "cloudProvider" {
        FIELD_AWS_CLOUD_PROVIDER: aws_cloud_provider: Option<AwsCloudProvider> = "awsCloudProvider",
        FIELD_AZURE_CLOUD_PROVIDER: azure_cloud_provider: Option<AzureCloudProvider> = "azureCloudProvider",
        /// Raw cloud-config contents for providers without a typed section.
        FIELD_CUSTOM_CLOUD_PROVIDER: custom_cloud_provider: String = "customCloudProvider",
        FIELD_NAME: name: String = "name",
        FIELD_OPENSTACK_CLOUD_PROVIDER: openstack_cloud_provider: Option<OpenstackCloudProvider> = "openstackCloudProvider",
        FIELD_VSPHERE_CLOUD_PROVIDER: vsphere_cloud_provider: Option<VsphereCloudProvider> = "vsphereCloudProvider",
    }
}

impl CloudProvider {
    /// Number of provider-specific sections that are set.
    pub fn configured_sections(&self) -> usize {
        [
            self.aws_cloud_provider.is_some(),
            self.azure_cloud_provider.is_some(),
            self.openstack_cloud_provider.is_some(),
            self.vsphere_cloud_provider.is_some(),
            !self.custom_cloud_provider.is_empty(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
