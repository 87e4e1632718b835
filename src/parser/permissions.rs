//! Decoding of the permission field (`drwxr-x---`)

use super::error::{ParseError, ParseResult};
use crate::types::{EntryKind, PermissionTriple};

/// Number of characters in a permission field
pub const PERMISSION_FIELD_LEN: usize = 10;

/// Entry kind plus the three permission triples of one listing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub kind: EntryKind,
    pub user: PermissionTriple,
    pub group: PermissionTriple,
    pub others: PermissionTriple,
}

/// Decode a complete 10-character permission token.
///
/// `d` in the first column marks a directory; any other marker is a regular
/// file. In the remaining nine columns `-` clears a flag and any other
/// character sets it, so `s`, `t` and friends count as execute.
pub fn decode_permissions(token: &str) -> ParseResult<Permissions> {
    let chars: [char; PERMISSION_FIELD_LEN] = token
        .chars()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|chars: Vec<char>| ParseError::MalformedPermissionField {
            token: token.to_string(),
            length: chars.len(),
        })?;

    let kind = if chars[0] == 'd' {
        EntryKind::Directory
    } else {
        EntryKind::RegularFile
    };

    Ok(Permissions {
        kind,
        user: triple(&chars[1..4]),
        group: triple(&chars[4..7]),
        others: triple(&chars[7..10]),
    })
}

fn triple(flags: &[char]) -> PermissionTriple {
    let set = |c: char| c != '-';
    PermissionTriple::new(set(flags[0]), set(flags[1]), set(flags[2]))
}
