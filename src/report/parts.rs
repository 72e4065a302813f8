//! Parts list: material counts, shares and cost estimate

use crate::io::configuration::PlanConfig;
use crate::io::error::Result;
use crate::pattern::{ColorId, Palette};
use crate::plan::Tally;
use crate::report::text::{RULE_WIDTH, banner, group_thousands, rule, write_lines};
use std::path::{Path, PathBuf};

const PURCHASING_TIPS: [&str; 4] = [
    "Buy in batches by color to avoid mix-ups",
    "Consider loose bulk bricks to lower the cost",
    "Keep a 10% reserve for losses",
    "Buy the most-used colors first",
];

const ASSEMBLY_TIPS: [&str; 5] = [
    "Prepare enough workspace",
    "Sort the bricks by color",
    "Build upward from the bottom row",
    "Check each row once it is finished",
    "Photograph your progress for reference",
];

/// One color's share of the mosaic
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLine {
    /// Color counted
    pub color: ColorId,
    /// Bricks of this color
    pub count: usize,
    /// `count / total * 100`
    pub percentage: f64,
}

/// Cost of one billable color
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    /// Color priced
    pub color: ColorId,
    /// Bricks of this color
    pub count: usize,
    /// Base price times the color's multiplier
    pub unit_price: f64,
    /// `count * unit_price`
    pub cost: f64,
}

/// Per-color costs and their sum
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    /// Billable colors, most used first
    pub lines: Vec<CostLine>,
    /// Sum of all line costs
    pub total: f64,
}

/// Colors from most to least used with their percentage of `total`
pub fn material_lines(tally: &Tally, total: usize) -> Vec<MaterialLine> {
    tally
        .by_descending_count()
        .into_iter()
        .map(|(color, count)| MaterialLine {
            color: color.clone(),
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// Price every color except the palette background
pub fn estimate_cost(tally: &Tally, palette: &Palette, base_price: f64) -> CostEstimate {
    let lines: Vec<CostLine> = tally
        .by_descending_count()
        .into_iter()
        .filter(|(color, _)| *color != palette.background())
        .map(|(color, count)| {
            let multiplier = palette.cost_multiplier(color.as_str());
            CostLine {
                color: color.clone(),
                count,
                unit_price: base_price * multiplier,
                cost: count as f64 * base_price * multiplier,
            }
        })
        .collect();
    let total = lines.iter().map(|line| line.cost).sum();

    CostEstimate { lines, total }
}

/// Parts list text, one entry per line
///
/// The output depends only on the arguments, so identical tallies give
/// identical reports apart from `generated_at`.
pub fn render_parts_list(
    tally: &Tally,
    palette: &Palette,
    config: &PlanConfig,
    generated_at: &str,
) -> Vec<String> {
    let total = config.total_bricks();
    let currency = &config.currency;
    let mut report = banner(&format!("{} - Parts List", config.project_name));
    report.push(format!("Generated: {generated_at}"));
    report.push(String::new());

    report.push("Specifications:".to_string());
    report.push(format!(
        "  Overall size: {}mm x {}mm",
        config.total_width_mm, config.total_height_mm
    ));
    report.push(format!(
        "  Brick size: {0}mm x {0}mm",
        config.brick_size_mm
    ));
    report.push(format!(
        "  Grid: {} columns x {} rows",
        config.grid_width(),
        config.grid_height()
    ));
    report.push(format!("  Total bricks: {}", group_thousands(total)));
    report.push(String::new());

    report.push("Materials:".to_string());
    report.push(rule('-', RULE_WIDTH));
    let materials = material_lines(tally, total);
    for line in &materials {
        report.push(format!(
            "  {:<10} : {:>6}  ({:5.1}%)",
            palette.name(line.color.as_str()),
            group_thousands(line.count),
            line.percentage
        ));
    }
    let used: usize = materials.iter().map(|line| line.count).sum();
    report.push(rule('-', RULE_WIDTH));
    report.push(format!("  Total used  : {:>6}", group_thousands(used)));
    report.push(format!(
        "  Blank cells : {:>6}",
        group_thousands(total.saturating_sub(used))
    ));
    report.push(String::new());

    report.push("Cost estimate:".to_string());
    let estimate = estimate_cost(tally, palette, config.base_unit_price);
    for line in &estimate.lines {
        report.push(format!(
            "  {:<10} : {currency}{:8.2} ({} x {currency}{:.2})",
            palette.name(line.color.as_str()),
            line.cost,
            line.count,
            line.unit_price
        ));
    }
    report.push(rule('-', RULE_WIDTH));
    report.push(format!("  Estimated total : {currency}{:8.2}", estimate.total));
    report.push(String::new());

    report.push("Purchasing tips:".to_string());
    report.extend(numbered(&PURCHASING_TIPS));
    report.push(String::new());

    report.push("Assembly tips:".to_string());
    report.extend(numbered(&ASSEMBLY_TIPS));
    report.push(String::new());

    report
}

/// Render the parts list with the current local time and write it to `path`
///
/// # Errors
///
/// Returns an error if the report file cannot be created or written
pub fn write_parts_list(
    path: &Path,
    tally: &Tally,
    palette: &Palette,
    config: &PlanConfig,
) -> Result<PathBuf> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = render_parts_list(tally, palette, config, &generated_at);
    write_lines(path, &report)?;
    log::info!("Parts list saved: {}", path.display());
    Ok(path.to_path_buf())
}

fn numbered(items: &[&str]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {item}", i + 1))
        .collect()
}
