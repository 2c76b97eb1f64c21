#[macro_use]
extern crate unionfind;

use {
    log::info,
    simplelog::{Config, LevelFilter, SimpleLogger},
    unionfind::DisjointSet,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Trace, Config::default())?;

    let mut disjoint_set = DisjointSet::new();
    disjoint_set.add(vec![(1, 5)])?;
    disjoint_set.add(vec![(3, 0)])?;
    disjoint_set.add(vec![(7, 6)])?;
    disjoint_set.add(vec![(1, -1)])?;
    disjoint_set.add(vec![(1000, 3921)])?;

    info!("together: {}", disjoint_set.together(&(1, 5), &(1, -1))?);
    disjoint_set.union(&(1, 5), &(1, -1))?;
    info!("together: {}", disjoint_set.together(&(1, 5), &(1, -1))?);
    info!("together: {}", disjoint_set.together(&(3, 0), &(1, 5))?);

    if let Err(error) = disjoint_set.union(&(1, 5), &(2, 2)) {
        info!("union with (2, 2) failed: {}", error);
    }

    let colors = disjoint_set![
        "red" => "warm",
        "blue" => "cold",
        "orange" => "warm",
        "teal" => "cold",
        "grey" => "neutral",
    ];
    info!("{} colors in {} groups: {:?}", colors.len(), colors.subset_count(), colors);

    Ok(())
}
