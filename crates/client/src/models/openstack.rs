//! OpenStack in-tree cloud provider options.
//!
//! Keys mirror the sections of the OpenStack `cloud.conf` and are hyphenated.

record! {
    pub struct OpenstackCloudProvider => "openstackCloudProvider" {
        FIELD_BLOCK_STORAGE: block_storage: Option<BlockStorageOpenstackOpts> = "blockStorage",
        FIELD_GLOBAL: global: Option<GlobalOpenstackOpts> = "global",
        FIELD_LOAD_BALANCER: load_balancer: Option<LoadBalancerOpenstackOpts> = "loadBalancer",
        FIELD_METADATA: metadata: Option<MetadataOpenstackOpts> = "metadata",
        FIELD_ROUTE: route: Option<RouteOpenstackOpts> = "route",
    }
}

record! {
    pub struct GlobalOpenstackOpts => "globalOpenstackOpts" {
        FIELD_AUTH_URL: auth_url: String = "auth-url",
        FIELD_CA_FILE: ca_file: String = "ca-file",
        FIELD_DOMAIN_ID: domain_id: String = "domain-id",
        FIELD_DOMAIN_NAME: domain_name: String = "domain-name",
        FIELD_PASSWORD: password: String = "password" secret,
        FIELD_REGION: region: String = "region",
        FIELD_TENANT_ID: tenant_id: String = "tenant-id",
        FIELD_TENANT_NAME: tenant_name: String = "tenant-name",
        FIELD_TRUST_ID: trust_id: String = "trust-id",
        FIELD_USER_ID: user_id: String = "user-id",
        FIELD_USERNAME: username: String = "username",
    }
}

record! {
    pub struct LoadBalancerOpenstackOpts => "loadBalancerOpenstackOpts" {
        FIELD_CREATE_MONITOR: create_monitor: bool = "create-monitor",
        FIELD_FLOATING_NETWORK_ID: floating_network_id: String = "floating-network-id",
        FIELD_LB_METHOD: lb_method: String = "lb-method",
        FIELD_LB_PROVIDER: lb_provider: String = "lb-provider",
        FIELD_LB_VERSION: lb_version: String = "lb-version",
        FIELD_MANAGE_SECURITY_GROUPS: manage_security_groups: bool = "manage-security-groups",
        FIELD_MONITOR_DELAY: monitor_delay: String = "monitor-delay",
        FIELD_MONITOR_MAX_RETRIES: monitor_max_retries: i64 = "monitor-max-retries",
        FIELD_MONITOR_TIMEOUT: monitor_timeout: String = "monitor-timeout",
        FIELD_SUBNET_ID: subnet_id: String = "subnet-id",
        FIELD_USE_OCTAVIA: use_octavia: bool = "use-octavia",
    }
}

record! {
    pub struct BlockStorageOpenstackOpts => "blockStorageOpenstackOpts" {
        FIELD_BS_VERSION: bs_version: String = "bs-version",
        FIELD_IGNORE_VOLUME_AZ: ignore_volume_az: bool = "ignore-volume-az",
        FIELD_TRUST_DEVICE_PATH: trust_device_path: bool = "trust-device-path",
    }
}

record! {
    pub struct RouteOpenstackOpts => "routeOpenstackOpts" {
        FIELD_ROUTER_ID: router_id: String = "router-id",
    }
}

record! {
    pub struct MetadataOpenstackOpts => "metadataOpenstackOpts" {
        FIELD_SEARCH_ORDER: search_order: String = "search-order",
        /// Seconds.
        FIELD_REQUEST_TIMEOUT: request_timeout: i64 = "request-timeout",
    }
}
