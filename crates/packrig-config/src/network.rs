//! Host network address discovery for the dev server.
//!
//! The dev server binds to the IPv4 address of a named interface so other
//! devices on the LAN can reach it. A missing or unmatched interface is
//! not an error: resolution degrades to `0.0.0.0`, which is the documented
//! default. Enumeration is a single synchronous pass against live OS
//! state, so callers must not cache the result beyond one resolution pass.

use std::net::Ipv4Addr;

use pnet::datalink;
use pnet::ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAddress {
    /// Interface the address was discovered on; `None` for the fallback.
    pub interface_name: Option<String>,

    /// Always a valid IPv4 address; the fallback is `0.0.0.0`.
    pub ipv4: Ipv4Addr,
}

impl NetworkAddress {
    pub fn fallback() -> Self {
        Self {
            interface_name: None,
            ipv4: Ipv4Addr::UNSPECIFIED,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.ipv4 == Ipv4Addr::UNSPECIFIED
    }
}

/// One IPv4 address reported by a host interface.
///
/// The injectable seam between address selection and live enumeration:
/// selection logic is testable against a fixed candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCandidate {
    pub name: String,
    pub ipv4: Ipv4Addr,
    pub loopback: bool,
}

/// Select the address for `interface_name` from enumerated candidates.
///
/// Loopback candidates are skipped. No match yields the fallback.
pub fn select_address(
    interface_name: Option<&str>,
    candidates: &[InterfaceCandidate],
) -> NetworkAddress {
    let Some(wanted) = interface_name else {
        return NetworkAddress::fallback();
    };

    for candidate in candidates {
        if candidate.loopback {
            continue;
        }
        if candidate.name == wanted {
            return NetworkAddress {
                interface_name: Some(wanted.to_string()),
                ipv4: candidate.ipv4,
            };
        }
    }

    tracing::debug!(
        interface = wanted,
        "no matching interface, using fallback address"
    );
    NetworkAddress::fallback()
}

/// Enumerate live host interfaces and resolve `interface_name`.
///
/// `None` returns the fallback immediately without touching the OS
/// interface table.
pub fn resolve(interface_name: Option<&str>) -> NetworkAddress {
    if interface_name.is_none() {
        return NetworkAddress::fallback();
    }

    let candidates: Vec<InterfaceCandidate> = datalink::interfaces()
        .into_iter()
        .flat_map(|iface| {
            let loopback = iface.is_loopback();
            let name = iface.name.clone();
            iface.ips.into_iter().filter_map(move |network| match network {
                IpNetwork::V4(v4) => Some(InterfaceCandidate {
                    name: name.clone(),
                    ipv4: v4.ip(),
                    loopback,
                }),
                IpNetwork::V6(_) => None,
            })
        })
        .collect();

    select_address(interface_name, &candidates)
}
