//! Cisco ACI CNI network provider options.
//!
//! Every tunable travels as a string, including numeric and boolean ones; the
//! provider plugin parses them. A handful of keys do not follow the field
//! name (`externDynamic`, `externStatic`, `nodeSvcSubnet`, `opflexLogLevel`,
//! `systemId`).

use std::collections::BTreeMap;

record! {
    pub struct AciNetworkProvider => "aciNetworkProvider" {
        FIELD_ACI_CONTAINERS_CONTROLLER_MEMORY_LIMIT: aci_containers_controller_memory_limit: String = "aciContainersControllerMemoryLimit",
        FIELD_ACI_CONTAINERS_CONTROLLER_MEMORY_REQUEST: aci_containers_controller_memory_request: String = "aciContainersControllerMemoryRequest",
        FIELD_ACI_CONTAINERS_HOST_MEMORY_LIMIT: aci_containers_host_memory_limit: String = "aciContainersHostMemoryLimit",
        FIELD_ACI_CONTAINERS_HOST_MEMORY_REQUEST: aci_containers_host_memory_request: String = "aciContainersHostMemoryRequest",
        FIELD_ACI_CONTAINERS_MEMORY_LIMIT: aci_containers_memory_limit: String = "aciContainersMemoryLimit",
        FIELD_ACI_CONTAINERS_MEMORY_REQUEST: aci_containers_memory_request: String = "aciContainersMemoryRequest",
        FIELD_ACI_MULTIPOD: aci_multipod: String = "aciMultipod",
        FIELD_ACI_MULTIPOD_UBUNTU: aci_multipod_ubuntu: String = "aciMultipodUbuntu",
        FIELD_ADD_EXTERNAL_CONTRACT_TO_DEFAULT_EPG: add_external_contract_to_default_epg: String = "addExternalContractToDefaultEpg",
        FIELD_ADD_EXTERNAL_SUBNETS_TO_RDCONFIG: add_external_subnets_to_rdconfig: String = "addExternalSubnetsToRdconfig",
        FIELD_AEP: aep: String = "aep",
        FIELD_APIC_CONNECTION_RETRY_LIMIT: apic_connection_retry_limit: String = "apicConnectionRetryLimit",
        FIELD_APIC_HOSTS: apic_hosts: Vec<String> = "apicHosts",
        FIELD_APIC_REFRESH_TICKER_ADJUST: apic_refresh_ticker_adjust: String = "apicRefreshTickerAdjust",
        FIELD_APIC_REFRESH_TIME: apic_refresh_time: String = "apicRefreshTime",
        FIELD_APIC_SUBSCRIPTION_DELAY: apic_subscription_delay: String = "apicSubscriptionDelay",
        FIELD_APIC_USER_CRT: apic_user_crt: String = "apicUserCrt",
        FIELD_APIC_USER_KEY: apic_user_key: String = "apicUserKey" secret,
        FIELD_APIC_USER_NAME: apic_user_name: String = "apicUserName",
        FIELD_CAPIC: capic: String = "capic",
        FIELD_CONTROLLER_LOG_LEVEL: controller_log_level: String = "controllerLogLevel",
        FIELD_DHCP_DELAY: dhcp_delay: String = "dhcpDelay",
        FIELD_DHCP_RENEW_MAX_RETRY_COUNT: dhcp_renew_max_retry_count: String = "dhcpRenewMaxRetryCount",
        FIELD_DISABLE_HPP_RENDERING: disable_hpp_rendering: String = "disableHppRendering",
        FIELD_DISABLE_PERIODIC_SNAT_GLOBAL_INFO_SYNC: disable_periodic_snat_global_info_sync: String = "disablePeriodicSnatGlobalInfoSync",
        FIELD_DISABLE_WAIT_FOR_NETWORK: disable_wait_for_network: String = "disableWaitForNetwork",
        FIELD_DROP_LOG_DISABLE_EVENTS: drop_log_disable_events: String = "dropLogDisableEvents",
        FIELD_DROP_LOG_ENABLE: drop_log_enable: String = "dropLogEnable",
        FIELD_DURATION_WAIT_FOR_NETWORK: duration_wait_for_network: String = "durationWaitForNetwork",
        FIELD_DYNAMIC_EXTERNAL_SUBNET: dynamic_external_subnet: String = "externDynamic",
        FIELD_ENABLE_ENDPOINT_SLICE: enable_endpoint_slice: String = "enableEndpointSlice",
        FIELD_ENABLE_OPFLEX_AGENT_RECONNECT: enable_opflex_agent_reconnect: String = "enableOpflexAgentReconnect",
        FIELD_ENCAP_TYPE: encap_type: String = "encapType",
        FIELD_EP_REGISTRY: ep_registry: String = "epRegistry",
        FIELD_GBP_POD_SUBNET: gbp_pod_subnet: String = "gbpPodSubnet",
        FIELD_HOST_AGENT_LOG_LEVEL: host_agent_log_level: String = "hostAgentLogLevel",
        FIELD_HPP_OPTIMIZATION: hpp_optimization: String = "hppOptimization",
        FIELD_IMAGE_PULL_POLICY: image_pull_policy: String = "imagePullPolicy",
        FIELD_IMAGE_PULL_SECRET: image_pull_secret: String = "imagePullSecret",
        FIELD_INFRA_VLAN: infra_vlan: String = "infraVlan",
        FIELD_INSTALL_ISTIO: install_istio: String = "installIstio",
        FIELD_ISTIO_PROFILE: istio_profile: String = "istioProfile",
        FIELD_KAFKA_BROKERS: kafka_brokers: Vec<String> = "kafkaBrokers",
        FIELD_KAFKA_CLIENT_CRT: kafka_client_crt: String = "kafkaClientCrt",
        FIELD_KAFKA_CLIENT_KEY: kafka_client_key: String = "kafkaClientKey" secret,
        FIELD_KUBE_API_VLAN: kube_api_vlan: String = "kubeApiVlan",
        FIELD_L3OUT: l3out: String = "l3out",
        FIELD_L3OUT_EXTERNAL_NETWORKS: l3out_external_networks: Vec<String> = "l3outExternalNetworks",
        FIELD_MAX_NODES_SVC_GRAPH: max_nodes_svc_graph: String = "maxNodesSvcGraph",
        FIELD_MCAST_DAEMON_MEMORY_LIMIT: mcast_daemon_memory_limit: String = "mcastDaemonMemoryLimit",
        FIELD_MCAST_DAEMON_MEMORY_REQUEST: mcast_daemon_memory_request: String = "mcastDaemonMemoryRequest",
        FIELD_MCAST_RANGE_END: mcast_range_end: String = "mcastRangeEnd",
        FIELD_MCAST_RANGE_START: mcast_range_start: String = "mcastRangeStart",
        FIELD_MTU_HEAD_ROOM: mtu_head_room: String = "mtuHeadRoom",
        FIELD_MULTUS_DISABLE: multus_disable: String = "multusDisable",
        FIELD_NO_PRIORITY_CLASS: no_priority_class: String = "noPriorityClass",
        FIELD_NO_WAIT_FOR_SERVICE_EP_READINESS: no_wait_for_service_ep_readiness: String = "noWaitForServiceEpReadiness",
        FIELD_NODE_POD_IF_ENABLE: node_pod_if_enable: String = "nodePodIfEnable",
        FIELD_NODE_SNAT_REDIRECT_EXCLUDE: node_snat_redirect_exclude: Vec<BTreeMap<String, String>> = "nodeSnatRedirectExclude",
        FIELD_NODE_SUBNET: node_subnet: String = "nodeSubnet",
        FIELD_OPFLEX_AGENT_LOG_LEVEL: opflex_agent_log_level: String = "opflexLogLevel",
        FIELD_OPFLEX_AGENT_MEMORY_LIMIT: opflex_agent_memory_limit: String = "opflexAgentMemoryLimit",
        FIELD_OPFLEX_AGENT_MEMORY_REQUEST: opflex_agent_memory_request: String = "opflexAgentMemoryRequest",
        FIELD_OPFLEX_AGENT_OPFLEX_ASYNCJSON_ENABLED: opflex_agent_opflex_asyncjson_enabled: String = "opflexAgentOpflexAsyncjsonEnabled",
        FIELD_OPFLEX_AGENT_OVS_ASYNCJSON_ENABLED: opflex_agent_ovs_asyncjson_enabled: String = "opflexAgentOvsAsyncjsonEnabled",
        FIELD_OPFLEX_AGENT_POLICY_RETRY_DELAY_TIMER: opflex_agent_policy_retry_delay_timer: String = "opflexAgentPolicyRetryDelayTimer",
        FIELD_OPFLEX_AGENT_STATISTICS: opflex_agent_statistics: String = "opflexAgentStatistics",
        FIELD_OPFLEX_CLIENT_SSL: opflex_client_ssl: String = "opflexClientSsl",
        FIELD_OPFLEX_DEVICE_DELETE_TIMEOUT: opflex_device_delete_timeout: String = "opflexDeviceDeleteTimeout",
        FIELD_OPFLEX_DEVICE_RECONNECT_WAIT_TIMEOUT: opflex_device_reconnect_wait_timeout: String = "opflexDeviceReconnectWaitTimeout",
        FIELD_OPFLEX_MODE: opflex_mode: String = "opflexMode",
        FIELD_OPFLEX_OPENSSL_COMPAT: opflex_openssl_compat: String = "opflexOpensslCompat",
        FIELD_OPFLEX_SERVER_PORT: opflex_server_port: String = "opflexServerPort",
        FIELD_OPFLEX_STARTUP_ENABLED: opflex_startup_enabled: String = "opflexStartupEnabled",
        FIELD_OPFLEX_STARTUP_POLICY_DURATION: opflex_startup_policy_duration: String = "opflexStartupPolicyDuration",
        FIELD_OPFLEX_STARTUP_RESOLVE_AFT_CONN: opflex_startup_resolve_aft_conn: String = "opflexStartupResolveAftConn",
        FIELD_OPFLEX_SWITCH_SYNC_DELAY: opflex_switch_sync_delay: String = "opflexSwitchSyncDelay",
        FIELD_OPFLEX_SWITCH_SYNC_DYNAMIC: opflex_switch_sync_dynamic: String = "opflexSwitchSyncDynamic",
        FIELD_OVERLAY_VRF_NAME: overlay_vrf_name: String = "overlayVrfName",
        FIELD_OVS_MEMORY_LIMIT: ovs_memory_limit: String = "ovsMemoryLimit",
        FIELD_OVS_MEMORY_REQUEST: ovs_memory_request: String = "ovsMemoryRequest",
        FIELD_PBR_TRACKING_NON_SNAT: pbr_tracking_non_snat: String = "pbrTrackingNonSnat",
        FIELD_POD_SUBNET_CHUNK_SIZE: pod_subnet_chunk_size: String = "podSubnetChunkSize",
        FIELD_RUN_GBP_CONTAINER: run_gbp_container: String = "runGbpContainer",
        FIELD_RUN_OPFLEX_SERVER_CONTAINER: run_opflex_server_container: String = "runOpflexServerContainer",
        FIELD_SERVICE_GRAPH_ENDPOINT_ADD_DELAY: service_graph_endpoint_add_delay: String = "serviceGraphEndpointAddDelay",
        FIELD_SERVICE_GRAPH_ENDPOINT_ADD_SERVICES: service_graph_endpoint_add_services: Vec<BTreeMap<String, String>> = "serviceGraphEndpointAddServices",
        FIELD_SERVICE_GRAPH_SUBNET: service_graph_subnet: String = "nodeSvcSubnet",
        FIELD_SERVICE_MONITOR_INTERVAL: service_monitor_interval: String = "serviceMonitorInterval",
        FIELD_SERVICE_VLAN: service_vlan: String = "serviceVlan",
        FIELD_SLEEP_TIME_SNAT_GLOBAL_INFO_SYNC: sleep_time_snat_global_info_sync: String = "sleepTimeSnatGlobalInfoSync",
        FIELD_SNAT_CONTRACT_SCOPE: snat_contract_scope: String = "snatContractScope",
        FIELD_SNAT_NAMESPACE: snat_namespace: String = "snatNamespace",
        FIELD_SNAT_PORT_RANGE_END: snat_port_range_end: String = "snatPortRangeEnd",
        FIELD_SNAT_PORT_RANGE_START: snat_port_range_start: String = "snatPortRangeStart",
        FIELD_SNAT_PORTS_PER_NODE: snat_ports_per_node: String = "snatPortsPerNode",
        FIELD_SRIOV_ENABLE: sriov_enable: String = "sriovEnable",
        FIELD_STATIC_EXTERNAL_SUBNET: static_external_subnet: String = "externStatic",
        FIELD_SUBNET_DOMAIN_NAME: subnet_domain_name: String = "subnetDomainName",
        FIELD_SYSTEM_IDENTIFIER: system_identifier: String = "systemId",
        FIELD_TAINT_NOT_READY_NODE: taint_not_ready_node: String = "taintNotReadyNode",
        FIELD_TENANT: tenant: String = "tenant",
        FIELD_TOKEN: token: String = "token" secret,
        FIELD_TOLERATION_SECONDS: toleration_seconds: String = "tolerationSeconds",
        FIELD_USE_ACI_ANYWHERE_CRD: use_aci_anywhere_crd: String = "useAciAnywhereCrd",
        FIELD_USE_ACI_CNI_PRIORITY_CLASS: use_aci_cni_priority_class: String = "useAciCniPriorityClass",
        FIELD_USE_CLUSTER_ROLE: use_cluster_role: String = "useClusterRole",
        FIELD_USE_HOST_NETNS_VOLUME: use_host_netns_volume: String = "useHostNetnsVolume",
        FIELD_USE_OPFLEX_SERVER_VOLUME: use_opflex_server_volume: String = "useOpflexServerVolume",
        FIELD_USE_PRIVILEGED_CONTAINER: use_privileged_container: String = "usePrivilegedContainer",
        FIELD_USE_SYSTEM_NODE_PRIORITY_CLASS: use_system_node_priority_class: String = "useSystemNodePriorityClass",
        FIELD_VMM_CONTROLLER: vmm_controller: String = "vmmController",
        FIELD_VMM_DOMAIN: vmm_domain: String = "vmmDomain",
        FIELD_VRF_NAME: vrf_name: String = "vrfName",
        FIELD_VRF_TENANT: vrf_tenant: String = "vrfTenant",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::redact::redacted;
    use serde_json::json;

    #[test]
    fn test_keys_that_differ_from_field_names() {
        assert_eq!(AciNetworkProvider::FIELD_DYNAMIC_EXTERNAL_SUBNET, "externDynamic");
        assert_eq!(AciNetworkProvider::FIELD_STATIC_EXTERNAL_SUBNET, "externStatic");
        assert_eq!(AciNetworkProvider::FIELD_SERVICE_GRAPH_SUBNET, "nodeSvcSubnet");
        assert_eq!(AciNetworkProvider::FIELD_OPFLEX_AGENT_LOG_LEVEL, "opflexLogLevel");
        assert_eq!(AciNetworkProvider::FIELD_SYSTEM_IDENTIFIER, "systemId");
        assert_eq!(AciNetworkProvider::FIELD_CAPIC, "capic");
        assert_eq!(AciNetworkProvider::FIELD_L3OUT, "l3out");

        let provider = AciNetworkProvider {
            dynamic_external_subnet: "10.3.0.1/24".to_string(),
            service_graph_subnet: "10.5.0.1/24".to_string(),
            system_identifier: "rke-aci".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&provider).unwrap(),
            json!({
                "externDynamic": "10.3.0.1/24",
                "nodeSvcSubnet": "10.5.0.1/24",
                "systemId": "rke-aci"
            })
        );
    }

    #[test]
    fn test_list_of_maps_fields() {
        let provider: AciNetworkProvider = serde_json::from_value(json!({
            "apicHosts": ["10.1.1.101", "10.1.1.102"],
            "nodeSnatRedirectExclude": [{"group": "router", "labels": "router"}],
            "serviceGraphEndpointAddServices": []
        }))
        .unwrap();

        assert_eq!(provider.apic_hosts.len(), 2);
        assert_eq!(provider.node_snat_redirect_exclude[0]["group"], "router");
        assert!(provider.service_graph_endpoint_add_services.is_empty());

        let encoded = serde_json::to_value(&provider).unwrap();
        assert!(encoded.get("serviceGraphEndpointAddServices").is_none());
    }

    #[test]
    fn test_credentials_are_masked() {
        let secrets: Vec<_> = AciNetworkProvider::FIELDS
            .iter()
            .filter(|field| field.secret)
            .map(|field| field.name)
            .collect();
        assert_eq!(secrets, vec!["apicUserKey", "kafkaClientKey", "token"]);

        let provider = AciNetworkProvider {
            token: "tok".to_string(),
            tenant: "common".to_string(),
            ..Default::default()
        };
        let shown = redacted(&provider);
        assert_eq!(shown.token, crate::redact::REDACTED);
        assert_eq!(shown.tenant, "common");
        assert!(shown.apic_user_key.is_empty());
    }
}
