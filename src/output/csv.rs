use std::fmt::Write;

use crate::core::{BatterRow, PitcherRow};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub(crate) fn output_batting_csv(rows: &[BatterRow]) -> String {
    let mut out = String::new();
    out.push_str(
        "player_id,name,pa,ab,h,h1b,h2b,h3b,hr,bb,so,sf,rbi,pitches,swings,contacts,\
         zone_pitches,zone_swings,out_zone_pitches,out_zone_swings,hard_hits,barrels,\
         sweet_spots,bip,avg,obp,slg,ops,k_pct,bb_pct,babip,hard_hit_pct,barrel_pct,\
         sweet_spot_pct,contact_pct,o_swing_pct\n",
    );

    for row in rows {
        let t = &row.totals;
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},\
             {:.3},{:.3},{:.3},{:.3},{:.1},{:.1},{:.3},{:.1},{:.1},{:.1},{:.1},{:.1}",
            csv_escape(&row.player_id),
            csv_escape(&row.name),
            t.pa,
            t.ab,
            t.h,
            t.h1b,
            t.h2b,
            t.h3b,
            t.hr,
            t.bb,
            t.so,
            t.sf,
            t.rbi,
            t.pitches,
            t.swings,
            t.contacts,
            t.zone_pitches,
            t.zone_swings,
            t.out_zone_pitches,
            t.out_zone_swings,
            t.hard_hits,
            t.barrels,
            t.sweet_spots,
            t.bip,
            row.avg,
            row.obp,
            row.slg,
            row.ops,
            row.k_pct,
            row.bb_pct,
            row.babip,
            row.hard_hit_pct,
            row.barrel_pct,
            row.sweet_spot_pct,
            row.contact_pct,
            row.o_swing_pct,
        );
    }

    out
}

pub(crate) fn output_pitching_csv(rows: &[PitcherRow]) -> String {
    let mut out = String::new();
    out.push_str(
        "player_id,name,bf,outs,h,hr,bb,so,runs,bip,hard_hits,fb,gb,ip,era,whip,k9,bb9,\
         k_bb,hard_hit_pct,gb_pct,fb_pct\n",
    );

    for row in rows {
        let t = &row.totals;
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{:.1},{:.2},{:.2},{:.2},{:.2},{:.2},\
             {:.1},{:.1},{:.1}",
            csv_escape(&row.player_id),
            csv_escape(&row.name),
            t.bf,
            t.outs,
            t.h,
            t.hr,
            t.bb,
            t.so,
            t.runs,
            t.bip,
            t.hard_hits,
            t.fb,
            t.gb,
            row.ip,
            row.era,
            row.whip,
            row.k9,
            row.bb9,
            row.k_bb,
            row.hard_hit_pct,
            row.gb_pct,
            row.fb_pct,
        );
    }

    out
}
