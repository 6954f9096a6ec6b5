// Intra-process round-trip fixture: ping and pong nodes share one executor
// and one process; exits once the reply is observed.

use ibis::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use trace_fixtures::{PingNode, PongNode};

const MAX_ITERATIONS: usize = 100;

fn main() -> Result<()> {
    runtime::init(std::env::args())?;

    let done = Arc::new(AtomicBool::new(false));

    let mut sched = Scheduler::new().name("test_intra");
    sched.add(Box::new(PingNode::new(done.clone())?), 0, None);
    sched.add(Box::new(PongNode::new()?), 1, None);

    for _ in 0..MAX_ITERATIONS {
        sched.tick_once()?;
        if done.load(Ordering::SeqCst) {
            break;
        }
    }

    let got_pong = done.load(Ordering::SeqCst);
    if got_pong {
        println!("pong received");
    }

    runtime::shutdown()?;

    if !got_pong {
        eprintln!("no pong observed after {} iterations", MAX_ITERATIONS);
        std::process::exit(1);
    }
    Ok(())
}
