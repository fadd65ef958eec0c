use crate::data_types::common::{OptimizeFor, TripContext};
use crate::data_types::comparison::{
    ComparisonOutcome, ConsumptionEstimate, EnergyUse, RouteResult,
};
use crate::data_types::osrm::RawRoute;
use crate::util::round_to;

/// Single-pass, side-effect-free decision step: format both candidates, compute
/// the clamped savings percentage, pick the preferred result for the caller's
/// goal.
pub fn compare(
    fast_route: &RawRoute,
    eco_route: &RawRoute,
    fast_estimate: &ConsumptionEstimate,
    eco_estimate: &ConsumptionEstimate,
    context: &TripContext,
) -> ComparisonOutcome {
    let time_optimized = format_result(fast_route, fast_estimate);
    let eco_optimized = format_result(eco_route, eco_estimate);

    // Savings are computed from the rounded payload values, not the raw estimates.
    let co2_saved_percent = co2_saved_percent(time_optimized.co2_kg, eco_optimized.co2_kg);

    let preferred = match context.optimize_for {
        OptimizeFor::Time => time_optimized.clone(),
        OptimizeFor::Co2 => eco_optimized.clone(),
    };

    ComparisonOutcome {
        time_optimized,
        eco_optimized,
        preferred,
        co2_saved_percent,
        vehicle: context.vehicle,
    }
}

fn format_result(route: &RawRoute, estimate: &ConsumptionEstimate) -> RouteResult {
    let energy_use = match estimate.energy_use {
        EnergyUse::Fuel { fuel_l } => EnergyUse::Fuel {
            fuel_l: round_to(fuel_l, 3),
        },
        EnergyUse::Electric { energy_kwh } => EnergyUse::Electric {
            energy_kwh: round_to(energy_kwh, 2),
        },
    };

    RouteResult {
        distance_km: round_to(route.distance / 1000.0, 3),
        duration_min: round_to(route.duration / 60.0, 1),
        co2_kg: round_to(estimate.co2_kg, 3),
        energy_use,
        geometry: route.geometry.clone(),
    }
}

/// Percentage of CO₂ the eco candidate saves over the fast one. Clamped at zero
/// (a worse eco route reports no saving) and guarded against a zero-CO₂ fast
/// route in the denominator.
fn co2_saved_percent(fast_co2_kg: f64, eco_co2_kg: f64) -> u32 {
    let denominator = if fast_co2_kg == 0.0 { 1.0 } else { fast_co2_kg };
    let saved = ((fast_co2_kg - eco_co2_kg) / denominator * 100.0).max(0.0);

    saved.round() as u32
}
