use sessionfeed_types::ProgressFields;

/// Completion in [0, 100], or `None` when the payload carries no usable
/// progress (which hides the progress indicator).
///
/// A numeric `percent` wins; otherwise `current / total * 100` is used when
/// both are numeric and `total > 0`.
pub fn progress_percent(fields: &ProgressFields) -> Option<f64> {
    let percent = match fields.percent.as_ref().and_then(|p| p.as_number()) {
        Some(percent) => percent,
        None => {
            let current = fields.current.as_ref()?.as_number()?;
            let total = fields.total.as_ref()?.as_number()?;
            if total <= 0.0 {
                return None;
            }
            current / total * 100.0
        }
    };

    percent.is_finite().then(|| percent.clamp(0.0, 100.0))
}
