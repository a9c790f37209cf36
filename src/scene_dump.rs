use crate::layout::Scene;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct SceneDump {
    pub year: i32,
    pub day_width: f32,
    pub width: f32,
    pub height: f32,
    pub months: Vec<MonthDump>,
    pub days: Vec<DayDump>,
    pub gridlines: Vec<f32>,
    pub bars: Vec<BarDump>,
}

#[derive(Debug, Serialize)]
pub struct MonthDump {
    pub text: String,
    pub x: f32,
}

#[derive(Debug, Serialize)]
pub struct DayDump {
    pub date: String,
    pub x: f32,
    pub visible: bool,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
pub struct BarDump {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub start: String,
    pub end_exclusive: String,
}

impl SceneDump {
    pub fn from_scene(scene: &Scene) -> Self {
        let months = scene
            .months
            .iter()
            .map(|month| MonthDump {
                text: month.text.clone(),
                x: month.x,
            })
            .collect();

        let days = scene
            .days
            .iter()
            .map(|day| DayDump {
                date: day.date.to_string(),
                x: day.x,
                visible: day.visible,
                is_today: day.is_today,
            })
            .collect();

        let bars = scene
            .bars
            .iter()
            .map(|bar| BarDump {
                name: bar.name.clone(),
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                start: bar.start.to_string(),
                end_exclusive: bar.end_exclusive.to_string(),
            })
            .collect();

        SceneDump {
            year: scene.year,
            day_width: scene.day_width,
            width: scene.width,
            height: scene.height,
            months,
            days,
            gridlines: scene.gridlines.iter().map(|line| line.x).collect(),
            bars,
        }
    }
}

pub fn write_scene_dump(path: &Path, scene: &Scene) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = SceneDump::from_scene(scene);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
