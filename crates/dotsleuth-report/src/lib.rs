/// DotSleuth Report — plain-text frontend for the dotfile inventory.
///
/// This crate contains all presentation code. Business logic lives in
/// `dotsleuth-core`. The renderer writes to any [`Write`] sink so the
/// binary can hand it locked stdout while tests capture a `Vec<u8>`.
use dotsleuth_core::model::{Candidate, Inventory};

use std::io::{self, Write};

/// Maximum excluded entries shown before the list is truncated.
/// The excluded bucket routinely dwarfs the other two (caches, histories,
/// tool state) and would otherwise drown the report.
const EXCLUDED_DISPLAY_CAP: usize = 20;

/// Width of the `=` banners and `-` dividers.
const RULE_WIDTH: usize = 80;

/// Render the complete report: banner, the three category sections in
/// fixed order, the summary, and — when anything is safe to manage —
/// suggested `yadm` commands.
pub fn render(inventory: &Inventory, out: &mut impl Write) -> io::Result<()> {
    write_banner(out, "DOTFILES INVENTORY")?;
    writeln!(out)?;

    write_section(
        out,
        "✅ SAFE TO MANAGE (Recommended for yadm):",
        &inventory.safe,
        None,
    )?;
    write_section(
        out,
        "⚠️  UNKNOWN (Review before adding to yadm):",
        &inventory.unknown,
        None,
    )?;
    write_section(
        out,
        "❌ EXCLUDED (Should NOT be managed by yadm):",
        &inventory.excluded,
        Some(EXCLUDED_DISPLAY_CAP),
    )?;

    write_summary(out, inventory)?;
    write_suggestions(out, &inventory.safe)?;
    Ok(())
}

fn write_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// One category section: title, divider, sorted entries (or `(none)`),
/// then a blank line. `cap` truncates the listing after sorting and
/// appends a count of what was hidden.
fn write_section(
    out: &mut impl Write,
    title: &str,
    entries: &[Candidate],
    cap: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    if entries.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        let visible = cap.map_or(entries.len(), |cap| cap.min(entries.len()));
        for candidate in &entries[..visible] {
            writeln!(
                out,
                "  {:<8} {:<30} ({})",
                candidate.kind.tag(),
                candidate.name,
                candidate.size.label()
            )?;
        }
        if visible < entries.len() {
            writeln!(
                out,
                "  ... and {} more excluded items",
                entries.len() - visible
            )?;
        }
    }
    writeln!(out)
}

fn write_summary(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    write_banner(out, "SUMMARY")?;
    writeln!(out, "  {:<20}{}", "Safe to manage:", inventory.safe.len())?;
    writeln!(out, "  {:<20}{}", "Unknown (review):", inventory.unknown.len())?;
    writeln!(out, "  {:<20}{}", "Excluded:", inventory.excluded.len())?;
    writeln!(out)
}

/// Copy-pasteable follow-up commands for the safe bucket: one `yadm add`
/// per entry, then a single combined invocation. Nothing is printed when
/// the bucket is empty.
fn write_suggestions(out: &mut impl Write, safe: &[Candidate]) -> io::Result<()> {
    if safe.is_empty() {
        return Ok(());
    }

    writeln!(out, "Suggested yadm commands:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for candidate in safe {
        writeln!(out, "  yadm add ~/{}", candidate.name)?;
    }
    writeln!(out)?;

    writeln!(out, "Or run this to add all safe files at once:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    let paths: Vec<String> = safe.iter().map(|c| format!("~/{}", c.name)).collect();
    writeln!(out, "  yadm add {}", paths.join(" "))?;
    writeln!(out)
}
