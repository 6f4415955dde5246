//! Human-readable material information sheets.

use crate::material::MaterialRecord;
use crate::material_catalog::MaterialCatalog;
use colored::Colorize;
use std::fmt::Write;

const RULE: &str = "###################################################################";

fn section(out: &mut String, title: &str, rows: &[(&str, String)]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    for (key, value) in rows {
        let _ = writeln!(out, "{:<8}: {}", key, value);
    }
}

fn or_unknown(source: &Option<String>) -> String {
    source.clone().unwrap_or_else(|| "-".to_string())
}

/// Plain-text sheet listing every parameter group the material defines.
pub fn material_sheet(material: &MaterialRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Name             : {}", material.name);
    let _ = writeln!(out, "Alternative name : {}", material.altname);
    let _ = writeln!(out, "Sources          : {}", material.source);
    let _ = writeln!(out, "Used in          : {}", material.via);

    let f = &material.friction;
    section(
        &mut out,
        "Byerlee's law properties",
        &[
            ("f_f", format!("{} / {}", f.f_f_e, f.f_f_c)),
            ("f_p", f.f_p.to_string()),
            ("rho_b", f.rho_b.to_string()),
        ],
    );

    let p = &material.dislocation;
    section(
        &mut out,
        "Dislocation creep properties",
        &[
            ("Source", or_unknown(&material.source_disloc)),
            ("A_p", format!("{:e}", p.a_p)),
            ("n", p.n.to_string()),
            ("Q_p", p.q_p.to_string()),
        ],
    );

    if let Some(d) = &material.diffusion {
        section(
            &mut out,
            "Diffusion creep properties",
            &[
                ("Source", or_unknown(&material.source_diff)),
                ("A_f", format!("{:e}", d.a_f)),
                ("Q_f", d.q_f.to_string()),
                ("a", d.a.to_string()),
                ("m", d.m.to_string()),
            ],
        );
    }

    if let Some(d) = &material.dorn {
        section(
            &mut out,
            "Dorn's law properties",
            &[
                ("Source", or_unknown(&material.source_dorn)),
                ("sigma_d", format!("{:e}", d.sigma_d)),
                ("Q_d", d.q_d.to_string()),
                ("A_d", format!("{:e}", d.a_d)),
            ],
        );
    }

    let _ = writeln!(out, "{}", RULE);
    out
}

/// "name, source" entries for every catalog material, ordered by name.
pub fn material_menu(catalog: &MaterialCatalog) -> Vec<String> {
    catalog.sorted_by_name().into_iter().map(MaterialRecord::label).collect()
}

/// Prints the sheet with highlighted section headings.
pub fn print_material_sheet(material: &MaterialRecord) {
    println!();
    for line in material_sheet(material).lines() {
        if line.ends_with("properties") {
            println!("{}", line.bold().yellow());
        } else if line.starts_with('#') {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
    println!();
}
