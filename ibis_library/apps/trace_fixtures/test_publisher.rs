// Minimal publisher smoke fixture: registers one outbound channel, spins
// the executor exactly once without sending anything, and exits.

use ibis::prelude::*;
use trace_fixtures::PubNode;

fn main() -> Result<()> {
    runtime::init(std::env::args())?;

    let mut sched = Scheduler::new().name("test_publisher");
    sched.add(Box::new(PubNode::new()?), 0, None);

    println!("spinning once");
    sched.tick_once()?;

    runtime::shutdown()?;
    Ok(())
}
