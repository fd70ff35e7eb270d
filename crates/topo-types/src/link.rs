//! Physical links and logical traversal edges

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;
use crate::graph::Edge;
use crate::interface::PInterface;
use crate::pnf::Pnf;

/// Link variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    Otn,
    Eth,
    Dummy,
}

impl FromStr for LinkType {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OTN" => Ok(LinkType::Otn),
            "ETH" => Ok(LinkType::Eth),
            "DUMMY" => Ok(LinkType::Dummy),
            other => Err(TopologyError::UnknownLinkType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkType::Otn => "OTN",
            LinkType::Eth => "ETH",
            LinkType::Dummy => "DUMMY",
        };
        f.write_str(s)
    }
}

/// A directed physical connection between two interfaces.
///
/// The variant is fixed for the value's lifetime. Identity (equality and
/// hashing) is the variant plus the link name; endpoint payload is excluded
/// so that the two directions over one physical link compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Link {
    Otn {
        name: String,
        src: PInterface,
        dst: PInterface,
    },
    Eth {
        name: String,
        src: PInterface,
        dst: PInterface,
    },
    /// Placeholder adjacency where no real link data exists.
    Dummy { name: String },
}

impl Link {
    pub fn name(&self) -> &str {
        match self {
            Link::Otn { name, .. } | Link::Eth { name, .. } | Link::Dummy { name } => name,
        }
    }

    pub fn link_type(&self) -> LinkType {
        match self {
            Link::Otn { .. } => LinkType::Otn,
            Link::Eth { .. } => LinkType::Eth,
            Link::Dummy { .. } => LinkType::Dummy,
        }
    }

    pub fn endpoints(&self) -> Option<(&PInterface, &PInterface)> {
        match self {
            Link::Otn { src, dst, .. } | Link::Eth { src, dst, .. } => Some((src, dst)),
            Link::Dummy { .. } => None,
        }
    }

    /// Whether both endpoints resolve to the same network identifier.
    ///
    /// An endpoint with an unstructured interface name cannot resolve to a
    /// network id, so any link carrying one is cross-domain. A dummy link has
    /// no endpoints and is never inner-domain.
    pub fn is_inner_domain(&self) -> bool {
        match self {
            Link::Otn { src, dst, .. } | Link::Eth { src, dst, .. } => {
                match (src.name.network_id(), dst.name.network_id()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            Link::Dummy { .. } => false,
        }
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.link_type() == other.link_type() && self.name() == other.name()
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.link_type().hash(state);
        self.name().hash(state);
    }
}

/// A directed traversal edge between two PNFs, backed by a physical link.
///
/// Identity delegates to the underlying link, so forward and reverse edges
/// over one physical link compare equal (link-level identity).
#[derive(Debug, Clone)]
pub struct LogicalLink {
    src: Pnf,
    dst: Pnf,
    link: Link,
}

impl LogicalLink {
    pub fn new(src: Pnf, dst: Pnf, link: Link) -> Self {
        Self { src, dst, link }
    }

    pub fn src(&self) -> &Pnf {
        &self.src
    }

    pub fn dst(&self) -> &Pnf {
        &self.dst
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

impl Edge<Pnf> for LogicalLink {
    fn src(&self) -> &Pnf {
        &self.src
    }

    fn dst(&self) -> &Pnf {
        &self.dst
    }

    /// An inner-domain edge is always permitted. A cross-domain edge is
    /// forbidden exactly when the committed pair is the reverse of its own
    /// endpoints, which keeps a path from reusing a crossing's node pair.
    fn is_permitted(&self, src: &Pnf, dst: &Pnf) -> bool {
        if self.link.is_inner_domain() {
            return true;
        }
        !(dst == &self.src && src == &self.dst)
    }
}

impl PartialEq for LogicalLink {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl Eq for LogicalLink {}

impl Hash for LogicalLink {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.link.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::PInterfaceName;

    fn itf(provider: u32, ip: &str, ltp: u32) -> PInterface {
        let name = PInterfaceName::of(format!(
            "networkId-providerId-{}-clientId-0-topologyId-1-nodeId-{}-ltpId-{}",
            provider, ip, ltp
        ));
        PInterface::new(name.pnf_name().unwrap(), name)
    }

    fn pnf(provider: u32, ip: &str) -> Pnf {
        Pnf::new(format!(
            "networkId-providerId-{}-clientId-0-topologyId-1-nodeId-{}",
            provider, ip
        ))
    }

    #[test]
    fn link_type_parsing() {
        assert_eq!("OTN".parse::<LinkType>().unwrap(), LinkType::Otn);
        assert_eq!("ETH".parse::<LinkType>().unwrap(), LinkType::Eth);
        assert_eq!("DUMMY".parse::<LinkType>().unwrap(), LinkType::Dummy);
        assert!("otn".parse::<LinkType>().is_err());
        assert!("SDH".parse::<LinkType>().is_err());
    }

    #[test]
    fn inner_domain_requires_matching_network_ids() {
        let inner = Link::Otn {
            name: "l1".into(),
            src: itf(10, "10.1.1.1", 1),
            dst: itf(10, "10.1.1.2", 1),
        };
        assert!(inner.is_inner_domain());

        let cross = Link::Otn {
            name: "l2".into(),
            src: itf(10, "10.1.1.2", 8),
            dst: itf(20, "10.2.1.1", 8),
        };
        assert!(!cross.is_inner_domain());
    }

    #[test]
    fn unparsable_endpoint_is_cross_domain() {
        let link = Link::Eth {
            name: "l3".into(),
            src: itf(10, "10.1.1.1", 1),
            dst: PInterface::new("pnf-x", PInterfaceName::of("ge-0/0/1")),
        };
        assert!(!link.is_inner_domain());
    }

    #[test]
    fn dummy_is_never_inner_domain() {
        let link = Link::Dummy { name: "d1".into() };
        assert!(!link.is_inner_domain());
    }

    #[test]
    fn link_identity_is_variant_and_name() {
        let forward = Link::Otn {
            name: "l2".into(),
            src: itf(10, "10.1.1.2", 8),
            dst: itf(20, "10.2.1.1", 8),
        };
        let reverse = Link::Otn {
            name: "l2".into(),
            src: itf(20, "10.2.1.1", 8),
            dst: itf(10, "10.1.1.2", 8),
        };
        assert_eq!(forward, reverse);
        assert_ne!(forward, Link::Dummy { name: "l2".into() });
    }

    #[test]
    fn cross_domain_edge_forbids_reversed_pair() {
        let link = Link::Otn {
            name: "l2".into(),
            src: itf(10, "10.1.1.2", 8),
            dst: itf(20, "10.2.1.1", 8),
        };
        let a = pnf(10, "10.1.1.2");
        let b = pnf(20, "10.2.1.1");
        let edge = LogicalLink::new(a.clone(), b.clone(), link);

        // Committed pair equal to the reverse of the edge's own endpoints.
        assert!(!Edge::is_permitted(&edge, &b, &a));
        // Any other pair is fine.
        assert!(Edge::is_permitted(&edge, &a, &b));
        assert!(Edge::is_permitted(&edge, &pnf(10, "10.1.1.3"), &b));
    }

    #[test]
    fn inner_domain_edge_is_always_permitted() {
        let link = Link::Otn {
            name: "l1".into(),
            src: itf(10, "10.1.1.1", 1),
            dst: itf(10, "10.1.1.2", 1),
        };
        let a = pnf(10, "10.1.1.1");
        let b = pnf(10, "10.1.1.2");
        let edge = LogicalLink::new(a.clone(), b.clone(), link);
        assert!(Edge::is_permitted(&edge, &b, &a));
        assert!(Edge::is_permitted(&edge, &a, &b));
    }

    #[test]
    fn logical_link_identity_delegates_to_link() {
        let link = Link::Otn {
            name: "l2".into(),
            src: itf(10, "10.1.1.2", 8),
            dst: itf(20, "10.2.1.1", 8),
        };
        let a = pnf(10, "10.1.1.2");
        let b = pnf(20, "10.2.1.1");
        let forward = LogicalLink::new(a.clone(), b.clone(), link.clone());
        let reverse = LogicalLink::new(b, a, link);
        assert_eq!(forward, reverse);
    }
}
