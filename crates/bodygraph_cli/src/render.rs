//! Plain-text chart rendering.

use std::fmt::Write;

use anyhow::{Context, bail};

use bodygraph_base::{gate_line_from_longitude, gate_name, gate_start_deg};
use bodygraph_ephem::normalize_deg;
use bodygraph_search::{ChartPoint, ChartResult, DesignTime};
use bodygraph_time::UtcTime;

const RULE: &str = "==================================================";

fn write_point(out: &mut String, title: &str, point: &ChartPoint) {
    let _ = writeln!(out, "\n  {title}:");
    for p in point.iter() {
        let _ = writeln!(
            out,
            "    {:<10} Gate {}.{}  ({:.2}°)",
            p.point.name(),
            p.gate,
            p.line,
            p.degree
        );
    }
}

/// Full chart listing: summary, centers, gates, then both point tables.
pub fn chart_text(result: &ChartResult, name: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    if let Some(name) = name {
        let _ = writeln!(out, "  Human Design Chart: {name}");
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  Type:      {}", result.hd_type);
    let _ = writeln!(out, "  Profile:   {}", result.profile);
    let _ = writeln!(out, "  Authority: {}", result.authority);

    let _ = writeln!(out, "\n  Defined Centers:");
    for c in &result.defined_centers {
        let _ = writeln!(out, "    ✓ {c}");
    }
    let _ = writeln!(out, "\n  Open Centers:");
    for c in &result.undefined_centers {
        let _ = writeln!(out, "    ○ {c}");
    }

    let gates: Vec<u8> = result.active_gates.iter().copied().collect();
    let _ = writeln!(out, "\n  Active Gates: {gates:?}");
    if !result.active_channels.is_empty() {
        let labels: Vec<_> = result.active_channels.iter().map(|c| c.label()).collect();
        let _ = writeln!(out, "  Channels:     {}", labels.join(", "));
    }

    write_point(&mut out, "Personality (Conscious) - Black", &result.personality);
    write_point(&mut out, "Design (Unconscious) - Red", &result.design);
    if !result.design_time.converged {
        let _ = writeln!(
            out,
            "\n  note: design search stopped at its cap (residual {:.5}°)",
            result.design_time.residual_deg
        );
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Gate, line and gate name for a longitude, with where that gate begins.
pub fn gate_text(degree: f64) -> anyhow::Result<String> {
    let Some(gl) = gate_line_from_longitude(degree) else {
        bail!("degree must be finite, got {degree}");
    };
    let start = gate_start_deg(gl.gate).context("gate missing from the wheel")?;
    let name = gate_name(gl.gate).context("gate has no name")?;
    Ok(format!(
        "Gate {gl} - {name} ({:.4} deg, gate starts at {start:.4} deg)",
        normalize_deg(degree)
    ))
}

/// Birth and design moments in UTC.
pub fn design_text(jd_birth: f64, design: &DesignTime) -> anyhow::Result<String> {
    let birth = UtcTime::from_jd(jd_birth)?;
    let moment = UtcTime::from_jd(design.jd)?;
    Ok(format!(
        "Birth (UTC):  {birth}\nDesign (UTC): {moment}\nDesign Sun:   {:.4}° (residual {:+.6}°, {} iterations{})\nDays before:  {:.3}",
        design.target_longitude_deg,
        design.residual_deg,
        design.iterations,
        if design.converged { "" } else { ", not converged" },
        jd_birth - design.jd,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodygraph_search::calculate_chart_default;

    #[test]
    fn chart_listing_shape() {
        let r = calculate_chart_default(1988, 10, 9, 5, 30, -7.0).unwrap();
        let text = chart_text(&r, Some("Geode"));
        assert!(text.contains("  Human Design Chart: Geode"));
        assert!(text.contains(&format!("  Profile:   {}", r.profile)));
        assert_eq!(text.matches("    ✓ ").count(), r.defined_centers.len());
        assert_eq!(text.matches("    ○ ").count(), r.undefined_centers.len());
        assert_eq!(text.matches(" Gate ").count(), 26);
        assert!(text.contains("    Sun        Gate "));
    }

    #[test]
    fn unnamed_chart_has_no_title() {
        let r = calculate_chart_default(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!(!chart_text(&r, None).contains("Human Design Chart"));
    }

    #[test]
    fn gate_listing() {
        assert_eq!(
            gate_text(196.4).unwrap(),
            "Gate 57.2 - Intuitive Clarity (196.4000 deg, gate starts at 195.1250 deg)"
        );
        assert_eq!(
            gate_text(-1.75).unwrap(),
            "Gate 25.1 - Spirit of the Self (358.2500 deg, gate starts at 358.2500 deg)"
        );
        assert!(gate_text(f64::NAN).is_err());
    }

    #[test]
    fn design_listing() {
        let d = DesignTime {
            jd: 2_451_455.0,
            target_longitude_deg: 192.5,
            residual_deg: 2e-5,
            iterations: 17,
            converged: true,
        };
        let text = design_text(2_451_545.0, &d).unwrap();
        assert!(text.contains("Birth (UTC):  2000-01-01T12:00:00Z"));
        assert!(text.contains("Design (UTC): 1999-10-03T12:00:00Z"));
        assert!(text.contains("Days before:  90.000"));
    }
}
