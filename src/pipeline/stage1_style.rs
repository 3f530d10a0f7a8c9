use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::style::Theme;

pub struct Stage1Style;

impl Stage1Style {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Style {
    fn name(&self) -> &'static str {
        "stage1_style"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let theme = Theme::default();
        info!(
            primary = %theme.primary_color,
            background = %theme.background_color,
            card_shadow = theme.card_shadow,
            "theme_ready"
        );
        ctx.theme = Some(theme);
        Ok(())
    }
}
