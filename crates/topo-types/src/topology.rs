//! Topology model construction
//!
//! Builds the validated set of [`Pnf`] vertices and [`LogicalLink`] edges
//! from interchange records. All topology objects are constructed fresh per
//! path-computation invocation and are never persisted.

use std::collections::HashSet;

use crate::error::TopologyError;
use crate::interface::{PInterface, PInterfaceName};
use crate::link::{Link, LinkType, LogicalLink};
use crate::pnf::Pnf;
use crate::records::{LinkRecord, PnfRecord};
use crate::Result;

/// An immutable, validated directed graph of PNFs connected by logical
/// links. Malformed input fails the whole construction; no partial topology
/// is returned.
#[derive(Debug, Clone)]
pub struct Topology {
    pnfs: Vec<Pnf>,
    links: Vec<LogicalLink>,
}

impl Topology {
    pub fn from_records(pnfs: &[PnfRecord], links: &[LinkRecord]) -> Result<Self> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut pnf_list = Vec::with_capacity(pnfs.len());
        for record in pnfs {
            if !names.insert(record.pnf_name.as_str()) {
                return Err(TopologyError::DuplicatePnf {
                    name: record.pnf_name.clone(),
                });
            }
            pnf_list.push(Pnf::new(record.pnf_name.clone()));
        }

        let mut link_list = Vec::with_capacity(links.len());
        for record in links {
            let link_type: LinkType = record.link_type.parse()?;
            let (src_pnf, dst_pnf, link) = match link_type {
                LinkType::Otn | LinkType::Eth => {
                    let src = Self::endpoint(record, record.src_interface.as_deref(), "src-interface")?;
                    let dst = Self::endpoint(record, record.dst_interface.as_deref(), "dst-interface")?;
                    let link = match link_type {
                        LinkType::Otn => Link::Otn {
                            name: record.link_name.clone(),
                            src: src.clone(),
                            dst: dst.clone(),
                        },
                        LinkType::Eth => Link::Eth {
                            name: record.link_name.clone(),
                            src: src.clone(),
                            dst: dst.clone(),
                        },
                        LinkType::Dummy => unreachable!(),
                    };
                    (src.pnf_name, dst.pnf_name, link)
                }
                LinkType::Dummy => {
                    let src = Self::dummy_endpoint(record, record.src_pnf.as_deref(), "src-pnf")?;
                    let dst = Self::dummy_endpoint(record, record.dst_pnf.as_deref(), "dst-pnf")?;
                    let link = Link::Dummy {
                        name: record.link_name.clone(),
                    };
                    (src, dst, link)
                }
            };

            for pnf in [&src_pnf, &dst_pnf] {
                if !names.contains(pnf.as_str()) {
                    return Err(TopologyError::DanglingEndpoint {
                        link: record.link_name.clone(),
                        pnf: pnf.clone(),
                    });
                }
            }

            link_list.push(LogicalLink::new(Pnf::new(src_pnf), Pnf::new(dst_pnf), link));
        }

        log::debug!(
            "constructed topology with {} PNFs and {} logical links",
            pnf_list.len(),
            link_list.len()
        );
        Ok(Self {
            pnfs: pnf_list,
            links: link_list,
        })
    }

    fn endpoint(record: &LinkRecord, value: Option<&str>, field: &str) -> Result<PInterface> {
        let raw = value.ok_or_else(|| TopologyError::MissingField {
            link: record.link_name.clone(),
            field: field.to_string(),
        })?;
        let name = PInterfaceName::of(raw);
        let pnf_name = name
            .pnf_name()
            .ok_or_else(|| TopologyError::UnparsableInterface {
                link: record.link_name.clone(),
                name: raw.to_string(),
            })?;
        Ok(PInterface::new(pnf_name, name))
    }

    fn dummy_endpoint(record: &LinkRecord, value: Option<&str>, field: &str) -> Result<String> {
        value
            .map(str::to_string)
            .ok_or_else(|| TopologyError::MissingField {
                link: record.link_name.clone(),
                field: field.to_string(),
            })
    }

    pub fn pnfs(&self) -> &[Pnf] {
        &self.pnfs
    }

    pub fn links(&self) -> &[LogicalLink] {
        &self.links
    }

    pub fn contains(&self, pnf: &Pnf) -> bool {
        self.pnfs.iter().any(|p| p == pnf)
    }
}
