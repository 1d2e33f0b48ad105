// Generate ../src/catalogue.rs from presets.hjson.  Run from tools/.

use std::{string::String,
          collections::HashSet,
          env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value::{self, *};

#[derive(Debug)]
struct Preset {
    id: String,
    name: String,
    stops: Vec<u64>,
    min: f64,
    max: f64,
    distributed: bool,
}

fn number(v: Option<&Value>, what: &str, id: &str) -> f64 {
    match v {
        Some(I64(n)) => *n as f64,
        Some(U64(n)) => *n as f64,
        Some(F64(x)) => *x,
        _ => panic!("lightness-scale-tools: {id}: {what} is not a number"),
    }
}

fn stop(v: &Value, id: &str) -> u64 {
    match v {
        I64(n) if *n >= 0 => *n as u64,
        U64(n) => *n,
        _ => panic!("lightness-scale-tools: {id}: bad stop {v:?}"),
    }
}

fn preset_of_json(json: &Value) -> Preset {
    let p = match json {
        Object(p) => p,
        _ => panic!("lightness-scale-tools: preset {json:?} not an object") };
    let id = match p.get("id") {
        Some(String(id)) => id.clone(),
        _ => panic!("lightness-scale-tools: preset without id") };
    let name = match p.get("name") {
        Some(String(n)) => n.clone(),
        _ => panic!("lightness-scale-tools: {id}: no name") };
    let stops: Vec<u64> = match p.get("stops") {
        Some(Array(s)) => s.iter().map(|v| stop(v, &id)).collect(),
        _ => panic!("lightness-scale-tools: {id}: no stops") };
    let min = number(p.get("min"), "min", &id);
    let max = number(p.get("max"), "max", &id);
    let distributed = match p.get("distributed") {
        Some(Bool(b)) => *b,
        None => true,
        Some(v) => panic!("lightness-scale-tools: {id}: distributed = {v:?}"),
    };
    assert!(stops.len() >= 2, "{id}: fewer than 2 stops");
    let distinct: HashSet<_> = stops.iter().collect();
    assert_eq!(distinct.len(), stops.len(), "{id}: duplicate stops");
    assert!(0. <= min && min <= max && max <= 100., "{id}: bad bounds");
    Preset { id, name, stops, min, max, distributed }
}

fn main() -> Result<(), Box<dyn Error>> {
    let fh = File::open("presets.hjson")?;
    let json: Value = serde_hjson::from_reader(fh)?;
    let presets: Vec<Preset> = match &json {
        Array(a) => a.iter().map(preset_of_json).collect(),
        _ => panic!("lightness-scale-tools: presets.hjson is not a list") };

    let mut fh = BufWriter::new(File::create("../src/catalogue.rs")?);
    writeln!(fh, "// Written by {}\n\n\
                  use std::ops::Deref;\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;\n",
             env::args().next().unwrap_or_default())?;

    for p in &presets {
        let stops: Vec<_> = p.stops.iter().map(|s| s.to_string()).collect();
        writeln!(fh, "lazy_static! {{\n  \
                      pub(crate) static ref {}: PresetData = PresetData {{\n    \
                      id: {:?},\n    \
                      name: {:?},\n    \
                      stops: vec![{}],\n    \
                      min: {:?},\n    \
                      max: {:?},\n    \
                      distributed: {},\n  \
                      }};\n}}\n",
                 p.id, p.id, p.name, stops.join(", "), p.min, p.max,
                 p.distributed)?;
    }

    write!(fh, "lazy_static! {{\n  \
                pub(crate) static ref ALL_PRESETS: \
                [&'static PresetData; {}] = [\n    ",
           presets.len())?;
    for p in &presets {
        write!(fh, "{}.deref(),\n    ", p.id)?;
    }
    writeln!(fh, "];\n}}")?;

    Ok(())
}
