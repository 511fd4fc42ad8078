//! Scalar community and goodness-of-fit statistics.

use std::f64::consts::PI;

use crate::error::{check_paired, AnalysisError};

/// Smith & Wilson's (1996, Oikos 76:70-82) evenness index Evar.
///
/// `Evar = 1 − (2/π)·arctan( Σᵢ (ln nᵢ − Σⱼ ln nⱼ / S)² / S )`, in `[0, 1]`
/// with 1 for a perfectly even community. Every abundance must be finite and
/// strictly positive.
pub fn e_var(abundances: &[f64]) -> Result<f64, AnalysisError> {
    if abundances.is_empty() {
        return Err(AnalysisError::invalid("abundance vector is empty"));
    }
    if let Some(bad) = abundances.iter().find(|n| !n.is_finite() || **n <= 0.0) {
        return Err(AnalysisError::invalid(format!(
            "Evar needs finite, strictly positive abundances, got {bad}"
        )));
    }
    let s = abundances.len() as f64;
    let mean_ln: f64 = abundances.iter().map(|n| n.ln() / s).sum();
    let spread: f64 = abundances
        .iter()
        .map(|n| (n.ln() - mean_ln).powi(2))
        .sum();
    Ok(1.0 - (2.0 / PI) * (spread / s).atan())
}

/// Share of the variability in `obs` accounted for by `pred`.
///
/// `R² = 1 − Σ(obs − pred)² / Σ(obs − mean(obs))²`. Can be negative when the
/// prediction is worse than the observed mean.
pub fn obs_pred_rsquare(obs: &[f64], pred: &[f64]) -> Result<f64, AnalysisError> {
    check_paired("obs", obs, "pred", pred)?;
    if obs.iter().chain(pred).any(|v| !v.is_finite()) {
        return Err(AnalysisError::invalid(
            "observed and predicted values must be finite",
        ));
    }
    let mean = obs.iter().sum::<f64>() / obs.len() as f64;
    let ss_res: f64 = obs.iter().zip(pred).map(|(o, p)| (o - p).powi(2)).sum();
    let ss_tot: f64 = obs.iter().map(|o| (o - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return Err(AnalysisError::degenerate(
            "observations have zero variance; R² undefined",
        ));
    }
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evar_even_community_is_one() {
        let e = e_var(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert!((e - 1.0).abs() < 1e-12);
    }

    #[test]
    fn evar_matches_hand_computation() {
        // ln values 0 and 1: mean 0.5, spread 0.5, spread / S = 0.25
        let e = e_var(&[1.0, std::f64::consts::E]).unwrap();
        let expected = 1.0 - (2.0 / PI) * 0.25f64.atan();
        assert!((e - expected).abs() < 1e-12);
        assert!(e > 0.0 && e < 1.0);
    }

    #[test]
    fn evar_rejects_non_positive() {
        assert!(e_var(&[1.0, 0.0]).unwrap_err().is_invalid_input());
        assert!(e_var(&[1.0, -1.0]).unwrap_err().is_invalid_input());
        assert!(e_var(&[]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn rsquare_perfect_and_partial_fit() {
        assert!((obs_pred_rsquare(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap() - 1.0).abs() < 1e-12);
        // ss_res = 2, ss_tot = 2
        assert!(obs_pred_rsquare(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0]).unwrap().abs() < 1e-12);
        // ss_res = 1, ss_tot = 2
        let r2 = obs_pred_rsquare(&[1.0, 2.0, 3.0], &[1.0, 2.0, 2.0]).unwrap();
        assert!((r2 - 0.5).abs() < 1e-12);
        // worse than the mean
        let r2 = obs_pred_rsquare(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r2 + 3.0).abs() < 1e-12);
    }

    #[test]
    fn rsquare_errors() {
        assert!(obs_pred_rsquare(&[1.0, 1.0], &[1.0, 2.0])
            .unwrap_err()
            .is_degenerate());
        assert!(obs_pred_rsquare(&[1.0, 2.0], &[1.0])
            .unwrap_err()
            .is_invalid_input());
        assert!(obs_pred_rsquare(&[], &[]).unwrap_err().is_invalid_input());
        assert!(obs_pred_rsquare(&[1.0, f64::NAN], &[1.0, 2.0])
            .unwrap_err()
            .is_invalid_input());
        assert!(obs_pred_rsquare(&[1.0, 2.0], &[1.0, f64::INFINITY])
            .unwrap_err()
            .is_invalid_input());
    }
}
