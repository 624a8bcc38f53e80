//! PNG rendering of the per-stage assignment matrices.
//!
//! Stages are stacked top to bottom. In each block, rows are vehicles and
//! columns are destinations (scenario order); an assigned cell is blue and
//! its shade grows with the delivered share of the stage.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::Result;
use crate::staging::PlanReport;

const CELL: u32 = 9;
const BORDER: u32 = 1;
const STAGE_GAP: u32 = 4;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const IDLE: Rgb<u8> = Rgb([225, 225, 225]);
const SEPARATOR: Rgb<u8> = Rgb([90, 90, 90]);

/// Draws the assignment matrices of every stage.
///
/// An empty report yields a 1×1 white image.
pub fn assignment_image(report: &PlanReport) -> RgbImage {
    let vehicle_ids: Vec<usize> = report.vehicles().iter().map(|v| v.id()).collect();
    let destination_ids: Vec<usize> = report.destinations().iter().map(|d| d.id()).collect();
    let stages = report.stages();

    let rows = vehicle_ids.len() as u32;
    let cols = destination_ids.len() as u32;
    let block_h = rows * CELL + (rows + 1) * BORDER;
    let width = cols * CELL + (cols + 1) * BORDER;
    let height = stages.len() as u32 * (block_h + STAGE_GAP);
    if width == 0 || height == 0 || stages.is_empty() {
        return ImageBuffer::from_pixel(1, 1, WHITE);
    }

    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, WHITE);

    for (s, stage) in stages.iter().enumerate() {
        let top = s as u32 * (block_h + STAGE_GAP);
        let stage_total = stage.total_delivered().max(f64::MIN_POSITIVE);

        for row in 0..rows {
            for col in 0..cols {
                let vehicle = vehicle_ids[row as usize];
                let destination = destination_ids[col as usize];
                let color = stage
                    .assignments()
                    .iter()
                    .find(|a| a.vehicle_id == vehicle && a.destination_id == destination)
                    .map(|a| {
                        let share = (a.delivered / stage_total).clamp(0.0, 1.0);
                        let fade = (160.0 * (1.0 - share)) as u8;
                        Rgb([fade, 100u8.saturating_add(fade / 2), 200])
                    })
                    .unwrap_or(IDLE);

                let x0 = BORDER + col * (CELL + BORDER);
                let y0 = top + BORDER + row * (CELL + BORDER);
                fill(&mut img, x0, y0, CELL, CELL, color);
            }
        }

        fill(&mut img, 0, top + block_h, width, STAGE_GAP / 2, SEPARATOR);
    }

    img
}

/// Renders [`assignment_image`] to a PNG file.
pub fn save_assignment_image(report: &PlanReport, path: impl AsRef<Path>) -> Result<()> {
    assignment_image(report).save(path)?;
    Ok(())
}

fn fill(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}
