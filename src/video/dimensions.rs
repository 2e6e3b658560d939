use crate::core::{LayoutConfig, NaturalSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationContext {
    /// Embedded in a scrolling feed; vertical media is compacted hard.
    Inline,
    /// Detail page or fullscreen modal.
    Standalone,
}

/// Space the host gives the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    pub container_width: f32,
    pub screen_height: f32,
}

/// Rendered height of one player, recomputed on each load and cached in
/// between.
#[derive(Debug, Clone)]
pub struct DimensionResolver {
    context: PresentationContext,
    config: LayoutConfig,
    height: f32,
}

impl DimensionResolver {
    pub fn new(context: PresentationContext, config: &LayoutConfig) -> Self {
        Self {
            context,
            config: config.clone(),
            height: config.default_height,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn context(&self) -> PresentationContext {
        self.context
    }

    /// Returns the height now in effect. Degenerate inputs keep the previous one.
    pub fn resolve(&mut self, natural_size: NaturalSize, bounds: LayoutBounds) -> f32 {
        let Some(aspect_ratio) = natural_size.aspect_ratio() else {
            log::debug!("Ignoring degenerate natural size {:?}", natural_size);
            return self.height;
        };

        let natural_height = bounds.container_width / aspect_ratio;
        let height = if aspect_ratio < 1.0 {
            let fraction = match self.context {
                PresentationContext::Inline => self.config.inline_vertical_fraction,
                PresentationContext::Standalone => self.config.standalone_vertical_fraction,
            };
            natural_height.min(fraction * bounds.screen_height)
        } else {
            let max_height = self.config.landscape_max_fraction * bounds.screen_height;
            natural_height.max(self.config.landscape_min_height).min(max_height)
        };

        if height.is_finite() && height > 0.0 {
            log::debug!("{:?} player height {:.1} (aspect {:.3})", self.context, height, aspect_ratio);
            self.height = height;
        }
        self.height
    }
}
