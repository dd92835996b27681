/*
 * Particle Field
 *
 * An animated network of particles drifting across the window. Particles are
 * pulled towards (or pushed away from) the mouse, bounce off the window edges
 * and are linked by faint lines when close to each other.
 *
 * A settings panel toggles the effect, the interaction mode, the accent color
 * and reduced motion. Press H to hide the panel and M to flip the mode.
 */

use particle_field::{app, cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse up front so --help exits before a window opens
    cli::args();

    nannou::app(app::model).update(app::update).run();
}
