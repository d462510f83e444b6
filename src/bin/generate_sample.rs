use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Curated innings table written as the dashboard's backend file.
/// Scores keep the raw not-out marker; the loader strips it.
const CENTURIES: &[(&str, &str, &str, &str)] = &[
    ("ODI", "SL", "2009-12-24", "107"),
    ("ODI", "BAN", "2010-01-11", "102*"),
    ("ODI", "AUS", "2010-10-20", "118"),
    ("ODI", "NZ", "2010-12-04", "105"),
    ("Test", "AUS", "2012-01-24", "116"),
    ("ODI", "SL", "2012-02-28", "133*"),
    ("ODI", "PAK", "2012-03-18", "183"),
    ("ODI", "SL", "2012-07-31", "128*"),
    ("ODI", "AUS", "2013-10-16", "100*"),
    ("ODI", "AUS", "2013-10-30", "115*"),
    ("Test", "SA", "2013-12-18", "119"),
    ("ODI", "NZ", "2014-01-19", "123"),
    ("Test", "AUS", "2014-12-09", "115"),
    ("Test", "AUS", "2014-12-26", "169"),
    ("ODI", "PAK", "2015-02-15", "107"),
    ("Test", "WI", "2016-07-21", "200"),
    ("Test", "NZ", "2016-10-08", "211"),
    ("ODI", "NZ", "2016-10-20", "154*"),
    ("Test", "ENG", "2016-12-10", "235"),
    ("ODI", "ENG", "2017-01-15", "122"),
    ("Test", "BAN", "2017-02-09", "204"),
    ("ODI", "SL", "2017-08-31", "131"),
    ("Test", "SL", "2017-12-02", "243"),
    ("Test", "SA", "2018-01-13", "153"),
    ("ODI", "SA", "2018-02-16", "129*"),
    ("Test", "ENG", "2018-08-01", "149"),
    ("Test", "SA", "2019-10-10", "254*"),
    ("Test", "BAN", "2019-11-22", "136"),
    ("T20I", "AFG", "2022-09-08", "122*"),
    ("ODI", "NZ", "2023-11-15", "117"),
];

fn main() -> Result<()> {
    let out_dir = Path::new("data");
    fs::create_dir_all(out_dir).context("creating data directory")?;
    let out_path = out_dir.join("centuries.csv");

    let mut writer = csv::Writer::from_path(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    writer.write_record(["Format", "Against", "Date", "Score"])?;
    for &(format, against, date, score) in CENTURIES {
        writer.write_record([format, against, date, score])?;
    }
    writer.flush()?;

    println!(
        "Wrote {} innings to {}",
        CENTURIES.len(),
        out_path.display()
    );
    Ok(())
}
