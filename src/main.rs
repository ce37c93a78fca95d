//! Circle Burst entry point
//!
//! Runs a headless simulation and prints a summary. The browser build starts
//! from the library's `platform::web::run` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Circle Burst (native) - headless run");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or_else(|| default.to_string());

    let Some(request) = circle_burst::SceneRequest::parse(&arg(0, "10"), &arg(1, "4")) else {
        log::error!("Circle count and speed must be positive numbers");
        eprintln!("usage: circle-burst [count] [speed] [frames] [seed]");
        std::process::exit(2);
    };
    let (Ok(frames), Ok(seed)) = (arg(2, "600").parse::<u64>(), arg(3, "42").parse::<u64>()) else {
        log::error!("Frame count and seed must be non-negative integers");
        eprintln!("usage: circle-burst [count] [speed] [frames] [seed]");
        std::process::exit(2);
    };

    let config = match native::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    native::run_headless(config, request, frames, seed);
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use circle_burst::audio::SoundEffect;
    use circle_burst::platform::Session;
    use circle_burst::renderer::{Painter, RecordingSink};
    use circle_burst::{ConfigError, SceneRequest, SimConfig};

    /// Environment variable naming a JSON config override file
    const CONFIG_ENV: &str = "CIRCLE_BURST_CONFIG";

    pub fn load_config() -> Result<SimConfig, ConfigError> {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Ok(SimConfig::default());
        };
        let json = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path, e)))?;
        log::info!("Loaded config from {}", path);
        SimConfig::from_json(&json)
    }

    pub fn run_headless(config: SimConfig, request: SceneRequest, frames: u64, seed: u64) {
        let mut session = Session::new(config, seed);
        let token = session.start(request);

        let mut sink = RecordingSink::default();
        let mut cues = 0usize;
        let mut peak_particles = 0usize;

        for _ in 0..frames {
            sink.reset();
            let Some(events) = session.frame(&token, &mut Painter::new(&mut sink)) else {
                break;
            };
            cues += events
                .iter()
                .filter(|e| SoundEffect::for_event(e) == Some(SoundEffect::Collision))
                .count();
            peak_particles = peak_particles.max(session.state.particles.len());
            log::trace!(
                "frame {}: {} draw commands",
                session.state.stats.frames,
                sink.commands.len()
            );
        }

        let stats = session.state.stats;
        log::info!(
            "Finished: {} frames, {} collisions, peak {} particles",
            stats.frames,
            stats.collisions,
            peak_particles
        );
        println!(
            "{} circles, {} frames, {} collisions ({} cues), peak {} particles, seed {}",
            session.state.circles.len(),
            stats.frames,
            stats.collisions,
            cues,
            peak_particles,
            session.state.seed
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::run, this is just to satisfy the compiler
}
