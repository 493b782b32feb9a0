use puppet_rig::physics::CollisionResponse;
use puppet_rig::{PhysicsConfig, Pose, RagdollDriver, RigError};
use std::process::ExitCode;

const DT: f32 = 1.0 / 60.0;
const DROP_HEIGHT: f32 = 80.0;

struct Args {
    frames: u32,
    pose: Option<String>,
    config: Option<String>,
}

fn parse_args() -> Args {
    let mut args = std::env::args().skip(1);
    Args {
        frames: args.next().and_then(|s| s.parse().ok()).unwrap_or(180),
        pose: args.next(),
        config: args.next(),
    }
}

fn run(args: Args) -> Result<Pose, RigError> {
    let target = match &args.pose {
        Some(path) => Pose::load(path)?,
        None => Pose::default(),
    };
    let config = match &args.config {
        Some(path) => PhysicsConfig::from_json_file(path)?,
        None => PhysicsConfig::default(),
    };

    // Start above the target so the body has to fall and catch itself.
    let mut start = target;
    start.offset.y -= DROP_HEIGHT;

    let mut driver = RagdollDriver::new(config);
    driver.reset(&start);

    let mut pose = start;
    for frame in 1..=args.frames {
        pose = driver.tick(DT, &target);
        if frame % 60 == 0 {
            let (speed, contacts) = driver.body().map_or((0.0, 0), |b| {
                (b.max_speed(), CollisionResponse::touching_ground(b, driver.config()))
            });
            log::info!(
                "frame {}: offset ({:.1}, {:.1}) tilt {:.3} max speed {:.3}, {} on ground",
                frame,
                pose.offset.x,
                pose.offset.y,
                pose.ground_tilt,
                speed,
                contacts
            );
        }
    }

    Ok(pose)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = parse_args();
    log::info!("simulating {} frames", args.frames);

    match run(args).and_then(|pose| pose.to_json()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("ragdoll-demo failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
