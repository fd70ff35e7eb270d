//! Indexed-record codec
//!
//! Record lists are flattened as `<prefix>[i].<field>` with indexes dense
//! from 0. A `<prefix>_length` key is honored when present; otherwise the
//! codec probes upward until an index carries none of the record's fields.
//! A record with some but not all required fields is an error, never
//! end-of-list.

use pce_topo_types::{LinkRecord, PathHop, PnfRecord};

use crate::error::ContextError;
use crate::memory::ContextMemory;
use crate::Result;

const FIELD_PNF_NAME: &str = "pnf-name";
const FIELD_LINK_TYPE: &str = "link-type";
const FIELD_LINK_NAME: &str = "link-name";
const FIELD_SRC_INTERFACE: &str = "src-interface";
const FIELD_DST_INTERFACE: &str = "dst-interface";
const FIELD_SRC_PNF: &str = "src-pnf";
const FIELD_DST_PNF: &str = "dst-pnf";

const LINK_TYPE_DUMMY: &str = "DUMMY";

fn field_key(prefix: &str, index: usize, field: &str) -> String {
    format!("{}[{}].{}", prefix, index, field)
}

fn field(ctx: &dyn ContextMemory, prefix: &str, index: usize, name: &str) -> Option<String> {
    ctx.get(&field_key(prefix, index, name))
}

fn require(ctx: &dyn ContextMemory, prefix: &str, index: usize, name: &str) -> Result<String> {
    field(ctx, prefix, index, name).ok_or_else(|| ContextError::MissingField {
        key: field_key(prefix, index, name),
    })
}

/// Declared list length from `<prefix>_length`, if the key is present.
fn list_length(ctx: &dyn ContextMemory, prefix: &str) -> Result<Option<usize>> {
    let key = format!("{}_length", prefix);
    match ctx.get(&key) {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ContextError::InvalidLength { key, value }),
        None => Ok(None),
    }
}

/// Read the PNF list under `prefix`.
pub fn read_pnf_records(ctx: &dyn ContextMemory, prefix: &str) -> Result<Vec<PnfRecord>> {
    let mut records = Vec::new();
    match list_length(ctx, prefix)? {
        Some(length) => {
            for index in 0..length {
                let pnf_name = require(ctx, prefix, index, FIELD_PNF_NAME)?;
                records.push(PnfRecord { pnf_name });
            }
        }
        None => {
            let mut index = 0;
            while let Some(pnf_name) = field(ctx, prefix, index, FIELD_PNF_NAME) {
                records.push(PnfRecord { pnf_name });
                index += 1;
            }
        }
    }
    log::debug!("read {} PNF records under '{}'", records.len(), prefix);
    Ok(records)
}

/// Read the link list under `prefix`.
pub fn read_link_records(ctx: &dyn ContextMemory, prefix: &str) -> Result<Vec<LinkRecord>> {
    let mut records = Vec::new();
    match list_length(ctx, prefix)? {
        Some(length) => {
            for index in 0..length {
                match read_link_record(ctx, prefix, index, false)? {
                    Some(record) => records.push(record),
                    None => unreachable!("declared-length reads never yield end-of-list"),
                }
            }
        }
        None => {
            let mut index = 0;
            while let Some(record) = read_link_record(ctx, prefix, index, true)? {
                records.push(record);
                index += 1;
            }
        }
    }
    log::debug!("read {} link records under '{}'", records.len(), prefix);
    Ok(records)
}

fn read_link_record(
    ctx: &dyn ContextMemory,
    prefix: &str,
    index: usize,
    probing: bool,
) -> Result<Option<LinkRecord>> {
    let link_type = field(ctx, prefix, index, FIELD_LINK_TYPE);
    let link_name = field(ctx, prefix, index, FIELD_LINK_NAME);
    let src_interface = field(ctx, prefix, index, FIELD_SRC_INTERFACE);
    let dst_interface = field(ctx, prefix, index, FIELD_DST_INTERFACE);
    let src_pnf = field(ctx, prefix, index, FIELD_SRC_PNF);
    let dst_pnf = field(ctx, prefix, index, FIELD_DST_PNF);

    if probing
        && link_type.is_none()
        && link_name.is_none()
        && src_interface.is_none()
        && dst_interface.is_none()
        && src_pnf.is_none()
        && dst_pnf.is_none()
    {
        return Ok(None);
    }

    let missing = |name: &str| ContextError::MissingField {
        key: field_key(prefix, index, name),
    };
    let link_type = link_type.ok_or_else(|| missing(FIELD_LINK_TYPE))?;
    let link_name = link_name.ok_or_else(|| missing(FIELD_LINK_NAME))?;

    if link_type == LINK_TYPE_DUMMY {
        if src_pnf.is_none() {
            return Err(missing(FIELD_SRC_PNF));
        }
        if dst_pnf.is_none() {
            return Err(missing(FIELD_DST_PNF));
        }
    } else {
        if src_interface.is_none() {
            return Err(missing(FIELD_SRC_INTERFACE));
        }
        if dst_interface.is_none() {
            return Err(missing(FIELD_DST_INTERFACE));
        }
    }

    Ok(Some(LinkRecord {
        link_type,
        link_name,
        src_interface,
        dst_interface,
        src_pnf,
        dst_pnf,
    }))
}

/// Which solution list a hop sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    Primary,
    Secondary,
}

impl SolutionKind {
    fn key_base(self) -> &'static str {
        match self {
            SolutionKind::Primary => "solutions",
            SolutionKind::Secondary => "secondarySolutions",
        }
    }
}

/// Write a hop list under `<prefix>.solutions` or
/// `<prefix>.secondarySolutions`. A zero-length list still writes the
/// `_length` key so the workflow engine can branch on it.
pub fn write_solutions(
    ctx: &mut dyn ContextMemory,
    prefix: &str,
    kind: SolutionKind,
    hops: &[PathHop],
) {
    let base = format!("{}.{}", prefix, kind.key_base());
    ctx.set(&format!("{}_length", base), &hops.len().to_string());
    for (index, hop) in hops.iter().enumerate() {
        let entry = format!("{}[{}]", base, index);
        ctx.set(&format!("{}.original_link", entry), &hop.original_link);
        ctx.set(&format!("{}.src_pnf", entry), &hop.src_pnf);
        ctx.set(&format!("{}.dst_pnf", entry), &hop.dst_pnf);
        if let Some(src_interface) = &hop.src_interface {
            ctx.set(&format!("{}.src_interface", entry), src_interface);
        }
        if let Some(dst_interface) = &hop.dst_interface {
            ctx.set(&format!("{}.dst_interface", entry), dst_interface);
        }
        ctx.set(
            &format!("{}.inner_domain", entry),
            if hop.inner_domain { "true" } else { "false" },
        );
    }
}
