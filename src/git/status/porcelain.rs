// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parser for `git status --porcelain=v1` output.
//!
//! ```text
//! XY PATH
//! XY ORIG -> PATH        (X or Y is R/C)
//! ?? PATH                untracked
//! !! PATH                ignored (skipped)
//!
//! X/Y: ' ' unchanged, A added, D deleted, R renamed,
//!      M/C/T/U/other -> modified
//! PATH may be C-quoted: "dir/with \"quote\"\303\251"
//! ```

use crate::error::{DeskResult, GitError};

use super::{ChangeKind, FileStatus, StatusReconciler};

/// Map one porcelain slot character.
const fn slot(code: u8) -> Option<ChangeKind> {
    match code {
        b' ' => None,
        b'A' => Some(ChangeKind::Added),
        b'D' => Some(ChangeKind::Deleted),
        b'R' => Some(ChangeKind::Renamed),
        _ => Some(ChangeKind::Modified),
    }
}

/// Parse porcelain v1 status output into unified records.
///
/// # Errors
///
/// Returns `GitError::MalformedStatusLine` for a line that is not `XY PATH`
/// or whose two slots are both blank.
pub fn parse(output: &str) -> DeskResult<Vec<FileStatus>> {
    let mut reconciler = StatusReconciler::new();

    for line in output.lines().filter(|l| !l.is_empty()) {
        let malformed = || GitError::MalformedStatusLine {
            line: line.to_string(),
        };

        let bytes = line.as_bytes();
        if bytes.len() < 4 || bytes[2] != b' ' || !bytes[..2].is_ascii() {
            return Err(malformed().into());
        }
        let (x, y) = (bytes[0], bytes[1]);
        let rest = &line[3..];

        match (x, y) {
            (b'!', b'!') => continue,
            (b'?', b'?') => {
                // nested repositories are listed as `dir/`
                let mut path = unquote(rest);
                if path.ends_with('/') {
                    path.pop();
                }
                reconciler.record_untracked(path);
                continue;
            }
            _ => {}
        }

        let path = if matches!(x, b'R' | b'C') || matches!(y, b'R' | b'C') {
            rename_target(rest).ok_or_else(malformed)?
        } else {
            rest
        };
        let path = unquote(path);

        match (slot(x), slot(y)) {
            (None, None) => return Err(malformed().into()),
            (index, worktree) => {
                if let Some(kind) = index {
                    reconciler.record_index(path.clone(), kind);
                }
                if let Some(kind) = worktree {
                    reconciler.record_worktree(path, kind);
                }
            }
        }
    }

    Ok(reconciler.finish())
}

/// Destination of `ORIG -> PATH`, honouring a quoted `ORIG`.
fn rename_target(rest: &str) -> Option<&str> {
    if let Some(quoted) = rest.strip_prefix('"') {
        let end = closing_quote(quoted)?;
        quoted[end + 1..].strip_prefix(" -> ")
    } else {
        rest.split_once(" -> ").map(|(_, to)| to)
    }
}

/// Byte index of the first unescaped `"` in `s`.
fn closing_quote(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, b) in s.bytes().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Undo git's C-style path quoting. Unquoted input is returned unchanged.
#[must_use]
pub fn unquote(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b'f') => bytes.push(0x0c),
            Some(b'n') => bytes.push(b'\n'),
            Some(b'r') => bytes.push(b'\r'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'v') => bytes.push(0x0b),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&n @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(n - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(u8::try_from(value).unwrap_or(b'?'));
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
