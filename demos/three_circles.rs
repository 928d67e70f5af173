// Sweep the default sample-count schedule for the reference circles under
// both bounding policies, persist the two series, and print the closing
// deviations.
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tricirc::prelude::*;

fn main() {
    let experiment = Experiment::reference();
    let mut rng = SmallRng::from_entropy();

    let outcome = experiment.run(&mut rng).unwrap();

    let mut sink = TextFileSink::new(".");
    sink.emit(&outcome.wide).unwrap();
    sink.emit(&outcome.narrow).unwrap();

    println!("exact area: {}", experiment.exact());
    for series in [&outcome.wide, &outcome.narrow] {
        let last = series.records().last().unwrap();
        println!(
            "{}: n = {}, estimate = {}, deviation = {} -> {}",
            series.policy(),
            last.n,
            last.estimate,
            last.deviation,
            sink.path_for(series).display()
        );
    }
}
