use comfy_table::{
    ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{BatterRow, PitcherRow};
use crate::output::format::{
    format_f2, format_ip, format_pct, format_rate3, header_cell, name_cell, right_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryOptions {
    pub(crate) events: usize,
    pub(crate) skipped: i64,
    pub(crate) files: usize,
    pub(crate) elapsed_ms: Option<f64>,
}

/// Print the summary line with optional timing
pub(crate) fn print_summary_line(opts: SummaryOptions, use_color: bool) {
    let stats_text = format!(
        "{} events across {} files ({} lines skipped)",
        opts.events, opts.files, opts.skipped
    );

    if let Some(ms) = opts.elapsed_ms {
        if use_color {
            println!("\n  {} | \x1b[36m{:.0}ms\x1b[0m\n", stats_text, ms);
        } else {
            println!("\n  {} | {:.0}ms\n", stats_text, ms);
        }
    } else {
        println!("\n  {}\n", stats_text);
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub(crate) fn print_batting_table(rows: &[BatterRow], opts: TableOptions) {
    let c = opts.use_color;
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Player", c),
        header_cell("PA", c),
        header_cell("AVG", c),
        header_cell("OBP", c),
        header_cell("SLG", c),
        header_cell("OPS", c),
        header_cell("HR", c),
        header_cell("RBI", c),
        header_cell("K%", c),
        header_cell("BB%", c),
        header_cell("BABIP", c),
        header_cell("HardHit%", c),
        header_cell("Barrel%", c),
        header_cell("Sweet%", c),
        header_cell("Contact%", c),
        header_cell("O-Swing%", c),
    ]);

    for row in rows {
        table.add_row(vec![
            name_cell(&row.name),
            right_cell(row.totals.pa.to_string()),
            right_cell(format_rate3(row.avg)),
            right_cell(format_rate3(row.obp)),
            right_cell(format_rate3(row.slg)),
            right_cell(format_rate3(row.ops)),
            right_cell(row.totals.hr.to_string()),
            right_cell(row.totals.rbi.to_string()),
            right_cell(format_pct(row.k_pct)),
            right_cell(format_pct(row.bb_pct)),
            right_cell(format_rate3(row.babip)),
            right_cell(format_pct(row.hard_hit_pct)),
            right_cell(format_pct(row.barrel_pct)),
            right_cell(format_pct(row.sweet_spot_pct)),
            right_cell(format_pct(row.contact_pct)),
            right_cell(format_pct(row.o_swing_pct)),
        ]);
    }

    println!("{table}");
}

pub(crate) fn print_pitching_table(rows: &[PitcherRow], opts: TableOptions) {
    let c = opts.use_color;
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Player", c),
        header_cell("ERA", c),
        header_cell("IP", c),
        header_cell("BF", c),
        header_cell("WHIP", c),
        header_cell("SO", c),
        header_cell("BB", c),
        header_cell("K/9", c),
        header_cell("BB/9", c),
        header_cell("K/BB", c),
        header_cell("Hard%", c),
        header_cell("GB%", c),
        header_cell("FB%", c),
    ]);

    for row in rows {
        table.add_row(vec![
            name_cell(&row.name),
            right_cell(format_f2(row.era)),
            right_cell(format_ip(row.ip)),
            right_cell(row.totals.bf.to_string()),
            right_cell(format_f2(row.whip)),
            right_cell(row.totals.so.to_string()),
            right_cell(row.totals.bb.to_string()),
            right_cell(format_f2(row.k9)),
            right_cell(format_f2(row.bb9)),
            right_cell(format_f2(row.k_bb)),
            right_cell(format_pct(row.hard_hit_pct)),
            right_cell(format_pct(row.gb_pct)),
            right_cell(format_pct(row.fb_pct)),
        ]);
    }

    println!("{table}");
}
