//! Full chart assembly: personality and design points, then derivation.

use bodygraph_base::{
    Profile, active_channels, defined_centers, degree_to_gate_line, determine_authority,
    determine_type, undefined_centers,
};
use bodygraph_ephem::{AnalyticEphemeris, PositionProvider, ecliptic_longitude, normalize_deg};
use bodygraph_time::BirthTime;

use crate::chart_types::{
    ALL_POINT_KINDS, ChartConfig, ChartPoint, ChartResult, PlanetPosition, PointSource,
};
use crate::design::find_design_jd;
use crate::error::SearchError;

/// All thirteen chart points at `jd_ut`.
///
/// Earth and the south node are the Sun and north node plus 180°.
pub fn chart_point_at<P: PositionProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
) -> Result<ChartPoint, SearchError> {
    let mut degrees = [0.0; 13];
    for (slot, kind) in degrees.iter_mut().zip(ALL_POINT_KINDS) {
        *slot = match kind.source() {
            PointSource::Queried(planet) => ecliptic_longitude(provider, planet, jd_ut)?,
            PointSource::OppositeOf(planet) => {
                normalize_deg(ecliptic_longitude(provider, planet, jd_ut)? + 180.0)
            }
        };
    }
    let positions = std::array::from_fn(|i| {
        let gl = degree_to_gate_line(degrees[i]);
        PlanetPosition {
            point: ALL_POINT_KINDS[i],
            degree: degrees[i],
            gate: gl.gate,
            line: gl.line,
        }
    });
    Ok(ChartPoint { positions })
}

/// Compute a chart for `birth` with positions from `provider`.
///
/// The birth time is validated before any ephemeris query. A design search
/// that hits its iteration cap still yields a chart; check
/// `design_time.converged`.
pub fn calculate_chart<P: PositionProvider + ?Sized>(
    provider: &P,
    birth: &BirthTime,
    config: &ChartConfig,
) -> Result<ChartResult, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let personality_jd = birth.to_jd_ut()?;

    let personality = chart_point_at(provider, personality_jd)?;
    let design_time = find_design_jd(provider, personality_jd, &config.design)?;
    let design = chart_point_at(provider, design_time.jd)?;

    let mut active_gates = personality.gates();
    active_gates.extend(design.gates());

    let defined = defined_centers(&active_gates);
    let hd_type = determine_type(&defined, &active_gates);
    let authority = determine_authority(&defined);
    let profile = Profile::new(personality.sun().line, design.sun().line);

    tracing::debug!(
        jd = personality_jd,
        design_jd = design_time.jd,
        %hd_type,
        %profile,
        %authority,
        "chart computed"
    );

    Ok(ChartResult {
        hd_type,
        profile,
        authority,
        undefined_centers: undefined_centers(&defined),
        defined_centers: defined,
        active_channels: active_channels(&active_gates),
        active_gates,
        personality,
        design,
        personality_jd,
        design_time,
    })
}

/// [`calculate_chart`] with the built-in ephemeris and default settings.
pub fn calculate_chart_default(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    utc_offset_hours: f64,
) -> Result<ChartResult, SearchError> {
    let birth = BirthTime::new(year, month, day, hour, minute, utc_offset_hours);
    calculate_chart(
        &AnalyticEphemeris::default(),
        &birth,
        &ChartConfig::default(),
    )
}
