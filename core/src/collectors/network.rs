use crate::document::NetworkAdapter;
use serde::Deserialize;
use std::collections::HashMap;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

// MSFT_NetAdapter MediaConnectState values
const CONNECT_STATE_UP: u32 = 1;
const CONNECT_STATE_DISCONNECTED: u32 = 2;

/// Adapter metadata from ROOT\StandardCimv2. Hardware addresses are
/// hyphen-separated in this source
#[derive(Debug, Deserialize)]
#[serde(rename = "MSFT_NetAdapter")]
pub struct NetAdapterRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "InterfaceIndex")]
    pub interface_index: Option<u32>,
    #[serde(rename = "MacAddress")]
    pub mac_address: Option<String>,
    #[serde(rename = "MediaConnectState")]
    pub media_connect_state: Option<u32>,
    #[serde(rename = "Speed")]
    pub speed: Option<u64>,
}

/// IP configuration from ROOT\CIMV2. Hardware addresses are colon-separated
/// in this source
#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_NetworkAdapterConfiguration")]
pub struct NetConfigRow {
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "MACAddress")]
    pub mac_address: Option<String>,
    #[serde(rename = "IPEnabled")]
    pub ip_enabled: Option<bool>,
    #[serde(rename = "DHCPEnabled")]
    pub dhcp_enabled: Option<bool>,
    #[serde(rename = "DHCPServer")]
    pub dhcp_server: Option<String>,
    #[serde(rename = "IPAddress")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(rename = "IPSubnet")]
    pub subnets: Option<Vec<String>>,
    #[serde(rename = "DefaultIPGateway")]
    pub gateways: Option<Vec<String>>,
    #[serde(rename = "DNSDomain")]
    pub dns_domain: Option<String>,
    #[serde(rename = "DNSServerSearchOrder")]
    pub dns_servers: Option<Vec<String>>,
}

/// Canonicalize a hardware address for lookups. The IP-configuration source
/// separates octets with colons, the adapter-metadata source with hyphens
pub fn normalize_hardware_address(address: &str) -> String {
    address.replace(':', "-")
}

/// Join IP configuration with adapter metadata by hardware address. The two
/// sources share no other key. Entries without matching metadata keep their
/// IP fields and resolve name, interface index, status, and link speed to
/// absence. Duplicate metadata addresses are last-write-wins
pub fn enrich_adapters(
    metadata: Vec<NetAdapterRow>,
    configs: Vec<NetConfigRow>,
) -> Vec<NetworkAdapter> {
    let mut lookup: HashMap<String, NetAdapterRow> = HashMap::new();
    for meta in metadata {
        if let Some(address) = meta.mac_address.clone() {
            lookup.insert(address, meta);
        }
    }

    let mut adapters = Vec::new();
    for config in configs {
        if config.ip_enabled != Some(true) {
            continue;
        }

        let key = normalize_hardware_address(config.mac_address.as_deref().unwrap_or_default());
        let meta = lookup.get(&key);

        adapters.push(NetworkAdapter {
            name: meta.and_then(|value| value.name.clone()),
            description: config.description.unwrap_or_default(),
            interface_index: meta.and_then(|value| value.interface_index),
            status: meta.map(|value| connect_state_label(value.media_connect_state)),
            link_speed: meta.and_then(|value| value.speed),
            dhcp_enabled: config.dhcp_enabled.unwrap_or(false),
            dhcp_server: config.dhcp_server.unwrap_or_default(),
            ip_addresses: join_values(&config.ip_addresses),
            subnets: join_values(&config.subnets),
            gateways: join_values(&config.gateways),
            dns_domain: config.dns_domain.unwrap_or_default(),
            dns_servers: join_values(&config.dns_servers),
            mac_address: config.mac_address.unwrap_or_default(),
        });
    }
    adapters
}

/// Flatten a multi-valued field into a single semicolon-delimited string
fn join_values(values: &Option<Vec<String>>) -> String {
    match values {
        Some(result) => result.join(";"),
        None => String::new(),
    }
}

fn connect_state_label(state: Option<u32>) -> String {
    match state {
        Some(CONNECT_STATE_UP) => String::from("Up"),
        Some(CONNECT_STATE_DISCONNECTED) => String::from("Disconnected"),
        _ => String::from("Unknown"),
    }
}

#[cfg(target_os = "windows")]
/// Get IP-enabled adapters enriched with adapter metadata
pub(crate) fn collect(interface: &Management) -> Result<Vec<NetworkAdapter>, CollectorError> {
    let metadata: Vec<NetAdapterRow> = interface.query_standard()?;
    let configs: Vec<NetConfigRow> = interface.query()?;
    Ok(enrich_adapters(metadata, configs))
}
