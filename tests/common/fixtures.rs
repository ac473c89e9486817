//! Fixture collection written to disk for each test server

use std::path::PathBuf;
use tempfile::TempDir;

/// A small Discogs-style export. Starts with a byte-order mark and carries the
/// extra columns a real export has.
pub const FIXTURE_CSV: &str = "\u{feff}Catalog#,Artist,Title,Label,Format,Rating,Released,release_id,CollectionFolder,Date Added\n\
CAD 3208,Grimes,Visions,4AD,\"LP, Album\",,2012,3425711,Uncategorized,2019-02-11 10:12:40\n\
CAD 3X42,Grimes,Art Angels,4AD,\"2xLP, Album\",,2015,7670451,Uncategorized,2019-02-11 10:14:02\n\
CAD 905,Pixies,Doolittle,4AD,\"LP, Album, RE\",,1989,1409468,Uncategorized,2019-03-01 18:20:11\n\
CAD 803,Pixies,Surfer Rosa,4AD,\"LP, Album, RE\",,1988,2278633,Uncategorized,2019-03-01 18:21:45\n\
AKR099,Sufjan Stevens,Carrie & Lowell,Asthmatic Kitty Records,\"LP, Album\",,2015,6746061,Uncategorized,2020-05-17 09:00:00\n\
AKR077,Sufjan Stevens,The Age of Adz,Asthmatic Kitty Records,\"2xLP, Album\",,2010,2515322,Uncategorized,2020-05-17 09:02:30\n\
IA110,Girl Talk,Feed the Animals,Illegal Art,\"2xLP, Album\",,2008,1517262,Uncategorized,2020-06-02 21:45:10\n\
SP1140,Beach House,Depression Cherry,Sub Pop,\"LP, Album\",,2015,7367212,Uncategorized,2021-01-09 12:00:00\n\
WARPLP55,Boards of Canada,Music Has the Right to Children,Warp Records,\"2xLP, Album, RE\",,1998,6207430,Uncategorized,2021-03-14 15:30:00\n\
AMB 3922,Aphex Twin,Selected Ambient Works 85-92,Apollo,\"2xLP, Comp\",,1992,28416,Uncategorized,2021-03-14 15:32:10\n\
DOC234,Japanese Breakfast,Jubilee,Dead Oceans,\"LP, Album\",,2021-06-04,18960721,Uncategorized,2021-07-01 08:08:08\n\
none,,White Label,,\"12\"\"\",,,0,Uncategorized,2022-01-01 00:00:00\n";

/// Writes `csv` to a fresh temporary directory and returns its path.
pub fn write_collection_csv(csv: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("collection.csv");
    std::fs::write(&path, csv)?;
    Ok((dir, path))
}
