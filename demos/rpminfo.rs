extern crate chrono;
extern crate clap;
extern crate rpmread;

use chrono::{TimeZone, Utc};
use clap::{App, Arg, SubCommand};
use rpmread::{tags, EntryValue};
use std::fs;

// ========================================================================= //

fn main() {
    let matches = App::new("rpminfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspects RPM package files")
        .subcommand(SubCommand::with_name("info")
                        .about("Prints basic information about a package")
                        .arg(Arg::with_name("rpm")
                                 .required(true)
                                 .help("Path to RPM package file")))
        .get_matches();
    if let Some(submatches) = matches.subcommand_matches("info") {
        let path = submatches.value_of("rpm").unwrap();
        let file = fs::File::open(path).unwrap();
        let package = rpmread::Package::read(file).unwrap();
        println!("Type: {:?}", package.package_type());
        println!("Name: {}", package.name().unwrap_or("(none)"));
        println!("Version: {}", package.version().unwrap_or("(none)"));
        println!("Release: {}", package.release().unwrap_or("(none)"));
        println!("Arch: {}", package.arch().unwrap_or("(none)"));
        if let Some(&EntryValue::Int32(ref times)) =
            package.get(tags::TAG_BUILDTIME)
        {
            if let Some(&time) = times.first() {
                println!("Build time: {}", Utc.timestamp(time as i64, 0));
            }
        }
        if let Some(filename) = package.filename() {
            println!("Filename: {}", filename);
        }
        if let Some(description) = package.description() {
            println!("");
            println!("{}", description);
        }
        println!("");
        println!("TAG TABLE");
        for (tag, value) in package.map().iter() {
            println!("{} = {:?}", tag, value);
        }
    }
}

// ========================================================================= //
