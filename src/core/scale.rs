use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
///
/// The pixel range may be reversed (`pixel_start > pixel_end`), which is how
/// the value axis maps larger amounts to smaller y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !(domain_end - domain_start).is_finite()
            || domain_start == domain_end
        {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale whose bounds are widened to "nice" tick multiples.
    ///
    /// Returns the scale together with its ticks in ascending order.
    pub fn nice(min: f64, max: f64, max_ticks: usize) -> ChartResult<(Self, Vec<f64>)> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "scale bounds must be finite".to_owned(),
            ));
        }
        let (mut min, mut max) = if min <= max { (min, max) } else { (max, min) };
        if min == max {
            let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
            min -= pad;
            max += pad;
        }

        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(ChartError::InvalidData(
                "scale span must be finite".to_owned(),
            ));
        }

        let intervals = max_ticks.max(2) - 1;
        let step = nice_step((max - min) / intervals as f64);
        let nice_min = (min / step).floor() * step;
        let nice_max = (max / step).ceil() * step;
        let raw_count = ((nice_max - nice_min) / step).round();
        if !step.is_finite()
            || step <= 0.0
            || !raw_count.is_finite()
            || raw_count > (intervals * 4) as f64
        {
            return Err(ChartError::InvalidData(format!(
                "cannot build nice ticks for [{min}, {max}]"
            )));
        }
        let count = raw_count as usize;

        let ticks = (0..=count)
            .map(|index| snap_to_step(nice_min + step * index as f64, step))
            .collect();
        Ok((Self::new(nice_min, nice_max)?, ticks))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel range must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }

    pub fn pixel_to_domain(self, pixel: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        if pixel_start == pixel_end || !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel range must be finite and non-empty".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - pixel_start) / (pixel_end - pixel_start);
        Ok(self.domain_start + normalized * span)
    }
}

/// Target tick count for an axis span, clamped to `[min_ticks, max_ticks]`.
#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn snap_to_step(value: f64, step: f64) -> f64 {
    let snapped = (value / step).round() * step;
    if snapped == 0.0 { 0.0 } else { snapped }
}
