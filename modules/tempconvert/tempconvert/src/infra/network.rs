use std::net::IpAddr;

use sysinfo::Networks;
use tempconvert_sdk::NetworkStatus;
use tracing::trace;

/// Reachability check backed by the host's network interfaces.
///
/// The host counts as online when an interface that has moved traffic
/// since boot carries an address that could reach another machine: not
/// loopback, not link-local and not unspecified. Interfaces with zero
/// bytes in both directions (down links, unused bridges) are skipped.
/// A bridge such as `docker0` that has carried container traffic still
/// counts, so this can report online with no upstream route.
/// Interfaces are re-enumerated on every query.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostNetworkStatus;

impl HostNetworkStatus {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NetworkStatus for HostNetworkStatus {
    fn is_reachable(&self) -> bool {
        let networks = Networks::new_with_refreshed_list();
        let reachable = has_active_interface(networks.list().values().map(|data| {
            InterfaceActivity {
                received: data.total_received(),
                transmitted: data.total_transmitted(),
                addrs: data.ip_networks().iter().map(|net| net.addr).collect(),
            }
        }));
        trace!(reachable, interfaces = networks.list().len(), "checked host network");
        reachable
    }
}

/// Traffic counters and addresses of one interface
#[derive(Debug, Clone, Default)]
pub struct InterfaceActivity {
    /// Bytes received since boot
    pub received: u64,
    /// Bytes transmitted since boot
    pub transmitted: u64,
    pub addrs: Vec<IpAddr>,
}

/// `true` iff an interface with traffic has a routable address.
#[must_use]
pub fn has_active_interface(interfaces: impl IntoIterator<Item = InterfaceActivity>) -> bool {
    interfaces
        .into_iter()
        .filter(|iface| iface.received > 0 || iface.transmitted > 0)
        .any(|iface| has_routable_address(iface.addrs))
}

/// `true` iff at least one address can carry traffic off the host.
#[must_use]
pub fn has_routable_address(addrs: impl IntoIterator<Item = IpAddr>) -> bool {
    addrs.into_iter().any(|addr| match addr {
        IpAddr::V4(v4) => !(v4.is_loopback() || v4.is_link_local() || v4.is_unspecified()),
        IpAddr::V6(v6) => {
            !(v6.is_loopback() || v6.is_unicast_link_local() || v6.is_unspecified())
        }
    })
}

/// Fixed answer, for hosts where interface enumeration is not wanted.
#[derive(Debug, Clone, Copy)]
pub struct StaticNetworkStatus(pub bool);

impl NetworkStatus for StaticNetworkStatus {
    fn is_reachable(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;

    #[test]
    fn test_no_interfaces_is_offline() {
        assert!(!has_routable_address([]));
    }

    #[test]
    fn test_loopback_only_is_offline() {
        assert!(!has_routable_address([
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
        ]));
    }

    #[test]
    fn test_link_local_only_is_offline() {
        assert!(!has_routable_address([
            IpAddr::V4(Ipv4Addr::new(169, 254, 10, 1)),
            "fe80::1".parse().unwrap(),
        ]));
    }

    #[test]
    fn test_private_lan_address_is_online() {
        assert!(has_routable_address([
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20)),
        ]));
    }

    #[test]
    fn test_global_ipv6_is_online() {
        assert!(has_routable_address(["2001:db8::5".parse().unwrap()]));
    }

    fn iface(received: u64, transmitted: u64, addr: IpAddr) -> InterfaceActivity {
        InterfaceActivity {
            received,
            transmitted,
            addrs: vec![addr],
        }
    }

    #[test]
    fn test_idle_interface_is_ignored() {
        let bridge = iface(0, 0, IpAddr::V4(Ipv4Addr::new(172, 17, 0, 1)));
        assert!(!has_active_interface([bridge]));
    }

    #[test]
    fn test_active_interface_is_online() {
        let lo = iface(4096, 4096, IpAddr::V4(Ipv4Addr::LOCALHOST));
        let bridge = iface(0, 0, IpAddr::V4(Ipv4Addr::new(172, 17, 0, 1)));
        let eth = iface(1500, 0, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)));
        assert!(has_active_interface([lo.clone(), bridge.clone(), eth]));
        assert!(!has_active_interface([lo, bridge]));
    }

    #[test]
    fn test_transmit_only_counts_as_active() {
        let eth = iface(0, 64, "2001:db8::5".parse().unwrap());
        assert!(has_active_interface([eth]));
    }

    #[test]
    fn test_static_status() {
        assert!(StaticNetworkStatus(true).is_reachable());
        assert!(!StaticNetworkStatus(false).is_reachable());
    }

    #[test]
    fn test_host_status_does_not_panic() {
        let _ = HostNetworkStatus::new().is_reachable();
    }
}
