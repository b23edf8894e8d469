use anyhow::Result;
use std::io::{self, Write};

use bodyline::models::Sex;
use bodyline::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load()?;

    if !skip {
        println!("bodyline initial setup\n");

        config.profile.height_cm = Some(prompt_f64("Height (cm)")?);
        config.profile.sex = Some(prompt_sex("Sex (male/female/other)")?);

        config.save()?;
        println!("\nSetup complete. Config stored in {:?}", Config::path());
        println!("Put your exported entries and goals in {:?}", Config::dataset_path());
    } else {
        config.save()?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_f64(label: &str) -> Result<f64> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<f64>() {
            Ok(v) if v > 0.0 => return Ok(v),
            _ => println!("Please enter a positive number."),
        }
    }
}

fn prompt_sex(label: &str) -> Result<Sex> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<Sex>() {
            Ok(v) => return Ok(v),
            Err(e) => println!("{}", e),
        }
    }
}
