use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::controllers::command::args::JuliaArgs;
use crate::controllers::command::reply::Reply;
use crate::core::fractals::julia::render_config::RenderConfig;
use crate::core::fractals::julia::renderer::JuliaRenderer;

/// Handles `JULIA [columns] [rows]` requests.
pub struct JuliaCommand<R: Rng> {
    renderer: JuliaRenderer<R>,
}

impl JuliaCommand<StdRng> {
    /// A command whose seeds come from the operating system's entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> JuliaCommand<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, RenderConfig::default())
    }

    pub fn with_config(rng: R, config: RenderConfig) -> Self {
        Self {
            renderer: JuliaRenderer::with_config(rng, config),
        }
    }

    /// Runs one request. `argv[0]` is the command name.
    ///
    /// A malformed argument yields an error reply before any seed is drawn.
    pub fn execute<A: AsRef<[u8]>>(&mut self, argv: &[A]) -> Reply {
        let args = match JuliaArgs::parse(argv) {
            Ok(args) => args,
            Err(err) => {
                tracing::warn!(error = ?err, "rejected julia arguments");
                return Reply::Error(err.to_string());
            }
        };

        match self.renderer.render_grid(args.columns, args.rows) {
            Ok((grid, seed)) => {
                tracing::debug!(
                    columns = grid.size().columns(),
                    rows = grid.size().rows(),
                    seed_real = seed.real,
                    seed_imag = seed.imag,
                    "rendered julia set"
                );

                Reply::text(grid.to_text())
            }
            Err(err) => {
                tracing::error!(error = %err, "julia render failed");
                Reply::Error(err.to_string())
            }
        }
    }
}
