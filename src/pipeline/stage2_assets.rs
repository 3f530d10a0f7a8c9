use anyhow::Result;
use tracing::info;

use crate::assets;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Assets;

impl Stage2Assets {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Assets {
    fn name(&self) -> &'static str {
        "stage2_assets"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let logo = assets::logo();
        info!(bytes = logo.data_uri.len(), "logo_embedded");
        ctx.logo = Some(logo);
        Ok(())
    }
}
