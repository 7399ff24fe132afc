//! Procedural fallback body silhouette.
//!
//! When a background image fails to load, the surface is seeded with this
//! deterministic outline instead: head, neck, shoulders, torso, arms, legs,
//! and (front view only) simple facial features, at fixed coordinates
//! calibrated to the default 400×600 surface. The figures are pure path
//! data; executing them against a 2D context happens in `render`, the only
//! module that touches the browser drawing API.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use crate::assets::View;
use crate::mapping::Point;

/// One path-building step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    /// Full circle around `center`.
    Circle { center: Point, radius: f64 },
    Close,
}

/// One `begin path … fill/stroke` group.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub path: Vec<PathCmd>,
    pub fill: bool,
    pub stroke: bool,
}

impl Figure {
    fn stroked(path: Vec<PathCmd>) -> Self {
        Self { path, fill: false, stroke: true }
    }

    fn filled(path: Vec<PathCmd>) -> Self {
        Self { path, fill: true, stroke: true }
    }
}

fn pt(x: f64, y: f64) -> PathCmd {
    PathCmd::MoveTo(Point::new(x, y))
}

fn ln(x: f64, y: f64) -> PathCmd {
    PathCmd::LineTo(Point::new(x, y))
}

/// The silhouette figures for one view, in draw order.
#[must_use]
pub fn body_figures(view: View) -> Vec<Figure> {
    let mut figures = vec![Figure::filled(vec![PathCmd::Circle {
        center: Point::new(200.0, 70.0),
        radius: 40.0,
    }])];

    match view {
        View::Front => {
            // Neck
            figures.push(Figure::stroked(vec![
                pt(180.0, 100.0),
                ln(180.0, 120.0),
                pt(220.0, 100.0),
                ln(220.0, 120.0),
            ]));
            // Shoulders
            figures.push(Figure::stroked(vec![
                pt(180.0, 120.0),
                ln(140.0, 150.0),
                pt(220.0, 120.0),
                ln(260.0, 150.0),
            ]));
            // Torso
            figures.push(Figure::filled(vec![
                pt(180.0, 120.0),
                ln(170.0, 280.0),
                ln(230.0, 280.0),
                ln(220.0, 120.0),
                PathCmd::Close,
            ]));
            // Arms
            figures.push(Figure::stroked(vec![
                pt(140.0, 150.0),
                ln(120.0, 250.0),
                ln(110.0, 320.0),
                pt(260.0, 150.0),
                ln(280.0, 250.0),
                ln(290.0, 320.0),
            ]));
            // Legs
            figures.push(Figure::stroked(vec![
                pt(170.0, 280.0),
                ln(160.0, 450.0),
                ln(150.0, 550.0),
                pt(230.0, 280.0),
                ln(240.0, 450.0),
                ln(250.0, 550.0),
            ]));
            // Eyes and mouth
            figures.push(Figure::stroked(vec![
                PathCmd::Circle { center: Point::new(185.0, 60.0), radius: 5.0 },
                PathCmd::Circle { center: Point::new(215.0, 60.0), radius: 5.0 },
                pt(185.0, 80.0),
                ln(215.0, 80.0),
            ]));
        }
        View::Back => {
            // Neck
            figures.push(Figure::stroked(vec![
                pt(190.0, 100.0),
                ln(190.0, 120.0),
                pt(210.0, 100.0),
                ln(210.0, 120.0),
            ]));
            // Shoulders
            figures.push(Figure::stroked(vec![
                pt(190.0, 120.0),
                ln(140.0, 150.0),
                pt(210.0, 120.0),
                ln(260.0, 150.0),
            ]));
            // Torso
            figures.push(Figure::filled(vec![
                pt(190.0, 120.0),
                ln(180.0, 280.0),
                ln(220.0, 280.0),
                ln(210.0, 120.0),
                PathCmd::Close,
            ]));
            // Arms
            figures.push(Figure::stroked(vec![
                pt(140.0, 150.0),
                ln(120.0, 250.0),
                ln(110.0, 320.0),
                pt(260.0, 150.0),
                ln(280.0, 250.0),
                ln(290.0, 320.0),
            ]));
            // Legs
            figures.push(Figure::stroked(vec![
                pt(180.0, 280.0),
                ln(170.0, 450.0),
                ln(160.0, 550.0),
                pt(220.0, 280.0),
                ln(230.0, 450.0),
                ln(240.0, 550.0),
            ]));
        }
    }

    figures
}
