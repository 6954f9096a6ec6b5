// Minimal subscription smoke fixture: registers one inbound channel, spins
// the executor exactly once, and exits. Nothing is ever received.

use ibis::prelude::*;
use trace_fixtures::SubNode;

fn main() -> Result<()> {
    runtime::init(std::env::args())?;

    let mut sched = Scheduler::new().name("test_subscription");
    sched.add(Box::new(SubNode::new()?), 0, None);

    println!("spinning once");
    sched.tick_once()?;

    runtime::shutdown()?;
    Ok(())
}
