/// Scanner module — enumerates the home directory and builds the inventory.
///
/// One fully synchronous pass: list immediate children, keep names starting
/// with the marker dot, classify each against the static rule sets, and
/// attach a size descriptor. Only a failure to list the home directory
/// itself is fatal; every per-entry failure is absorbed into a sentinel
/// descriptor so a single unreadable entry never aborts the report.
pub mod sizer;

use crate::model::{Candidate, Category, EntryKind, Inventory, SizeInfo};
use crate::rules;

use compact_str::CompactString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Fatal inventory failures.
///
/// Per-entry failures never appear here — they are folded into
/// [`SizeInfo`] sentinels on the affected candidate instead.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The home directory itself could not be listed.
    #[error("Permission denied accessing home directory")]
    HomePermissionDenied,

    /// No home directory is configured for the current user.
    #[error("could not determine the current user's home directory")]
    HomeDirUnknown,

    /// Any other I/O failure while listing the home directory.
    #[error("failed to list home directory: {0}")]
    Io(#[from] io::Error),
}

/// Inventory the invoking user's home directory.
pub fn inventory_home() -> Result<Inventory, InventoryError> {
    let home = dirs::home_dir().ok_or(InventoryError::HomeDirUnknown)?;
    inventory(&home)
}

/// Inventory dotfiles under an explicit directory.
///
/// Split out from [`inventory_home`] so tests can point the scanner at a
/// temporary directory.
pub fn inventory(home: &Path) -> Result<Inventory, InventoryError> {
    info!("Inventorying dotfiles under {}", home.display());
    let start = Instant::now();

    let entries = fs::read_dir(home).map_err(|err| {
        if err.kind() == io::ErrorKind::PermissionDenied {
            InventoryError::HomePermissionDenied
        } else {
            InventoryError::Io(err)
        }
    })?;

    let mut inventory = Inventory::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                // No name was yielded for this slot, so there is nothing
                // to classify or report.
                debug!("skipping unreadable directory entry: {err}");
                continue;
            }
        };

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with('.') {
            continue;
        }
        let name = CompactString::new(name.as_ref());
        let path = entry.path();

        // An entry that cannot even be stat'ed goes straight to the
        // excluded bucket with a sentinel descriptor; the pass continues.
        let (kind, size) = match sizer::probe(&path) {
            Ok(probed) => probed,
            Err(err) => {
                debug!("cannot stat {}: {err}", path.display());
                inventory.push(
                    Category::Excluded,
                    Candidate::new(name, EntryKind::File, SizeInfo::AccessDenied),
                );
                continue;
            }
        };

        inventory.push(rules::classify(&name), Candidate::new(name, kind, size));
    }

    inventory.sort();

    info!(
        "Inventory complete: {} safe, {} unknown, {} excluded in {:?}",
        inventory.safe.len(),
        inventory.unknown.len(),
        inventory.excluded.len(),
        start.elapsed()
    );

    Ok(inventory)
}
