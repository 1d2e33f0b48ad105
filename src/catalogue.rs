// Written by target/debug/lightness-scale-tools

use std::ops::Deref;
use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref MATERIAL: PresetData = PresetData {
    id: "MATERIAL",
    name: "Material Design, 50-900 (Google)",
    stops: vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900],
    min: 24.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref MATERIAL_3: PresetData = PresetData {
    id: "MATERIAL_3",
    name: "Material 3, 0-100 (Google)",
    stops: vec![100, 99, 95, 90, 80, 70, 60, 50, 40, 30, 20, 10, 0],
    min: 0.0,
    max: 100.0,
    distributed: false,
  };
}

lazy_static! {
  pub(crate) static ref TAILWIND: PresetData = PresetData {
    id: "TAILWIND",
    name: "Tailwind, 50-950",
    stops: vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950],
    min: 16.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref ANT: PresetData = PresetData {
    id: "ANT",
    name: "Ant Design, 1-10",
    stops: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    min: 24.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref ADS: PresetData = PresetData {
    id: "ADS",
    name: "Atlassian, 100-1000",
    stops: vec![100, 200, 300, 400, 500, 600, 700, 800, 900, 1000],
    min: 24.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref CARBON: PresetData = PresetData {
    id: "CARBON",
    name: "Carbon, 10-100 (IBM)",
    stops: vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100],
    min: 24.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref BASE: PresetData = PresetData {
    id: "BASE",
    name: "Base, 50-700 (Uber)",
    stops: vec![50, 100, 200, 300, 400, 500, 600, 700],
    min: 24.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref POLARIS: PresetData = PresetData {
    id: "POLARIS",
    name: "Polaris, 1-16 (Shopify)",
    stops: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
    min: 16.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref UNTITLED_UI: PresetData = PresetData {
    id: "UNTITLED_UI",
    name: "Untitled UI, 25-950",
    stops: vec![25, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950],
    min: 16.0,
    max: 98.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref OPEN_COLOR: PresetData = PresetData {
    id: "OPEN_COLOR",
    name: "Open Color, 0-9",
    stops: vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    min: 24.0,
    max: 96.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref CUSTOM: PresetData = PresetData {
    id: "CUSTOM",
    name: "Custom",
    stops: vec![1, 2],
    min: 10.0,
    max: 90.0,
    distributed: true,
  };
}

lazy_static! {
  pub(crate) static ref ALL_PRESETS: [&'static PresetData; 11] = [
    MATERIAL.deref(),
    MATERIAL_3.deref(),
    TAILWIND.deref(),
    ANT.deref(),
    ADS.deref(),
    CARBON.deref(),
    BASE.deref(),
    POLARIS.deref(),
    UNTITLED_UI.deref(),
    OPEN_COLOR.deref(),
    CUSTOM.deref(),
    ];
}
