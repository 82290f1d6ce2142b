//! Contour building from path commands
//!
//! Tracks a single running cursor across the command stream, applying the
//! absolute or relative rule of each command, and collects the typed points
//! of each subpath into contours.

use log::{debug, warn};

use crate::error::PathError;
use crate::outline::{AnchorStyle, Contour, Outline, Point};

use super::ast::{CommandKind, PathCommand};
use super::parse_commands;

/// What to do when a command's arguments don't fill whole coordinate groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupPolicy {
    /// Process whole groups and drop the remainder
    #[default]
    Truncate,
    /// Report `IncompleteCoordinateGroup`
    Strict,
}

/// Per-glyph options for contour building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub anchor_style: AnchorStyle,
    pub group_policy: GroupPolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how move-command anchors are typed
    pub fn with_anchor_style(mut self, style: AnchorStyle) -> Self {
        self.anchor_style = style;
        self
    }

    /// Set the trailing-argument policy
    pub fn with_group_policy(mut self, policy: GroupPolicy) -> Self {
        self.group_policy = policy;
        self
    }

    /// Shorthand for `GroupPolicy::Strict` when `strict` is true
    pub fn with_strict(self, strict: bool) -> Self {
        self.with_group_policy(if strict {
            GroupPolicy::Strict
        } else {
            GroupPolicy::Truncate
        })
    }
}

/// Builds an [`Outline`] one command at a time
#[derive(Debug)]
pub struct ContourBuilder {
    options: BuildOptions,
    current: (f64, f64),
    open: Option<Contour>,
    outline: Outline,
}

impl ContourBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            current: (0.0, 0.0),
            open: None,
            outline: Outline::new(),
        }
    }

    /// The cursor position after the commands applied so far
    pub fn current_position(&self) -> (f64, f64) {
        self.current
    }

    /// Apply one command
    pub fn apply(&mut self, cmd: &PathCommand) -> Result<(), PathError> {
        match cmd.kind() {
            CommandKind::MoveTo => self.move_to(cmd),
            CommandKind::LineTo => self.line_to(cmd),
            CommandKind::Horizontal => self.axis_to(cmd, Axis::X),
            CommandKind::Vertical => self.axis_to(cmd, Axis::Y),
            CommandKind::CurveTo => self.curve_to(cmd),
            CommandKind::Close => {
                self.close();
                Ok(())
            }
        }
    }

    /// Flush any open contour and return the finished outline
    pub fn finish(mut self) -> Outline {
        if let Some(contour) = self.open.take() {
            self.flush(contour);
        }
        self.outline
    }

    fn move_to(&mut self, cmd: &PathCommand) -> Result<(), PathError> {
        // A move's target is always taken literally, and only its first pair
        let Some(target) = self.groups(cmd)?.next() else {
            return Ok(());
        };
        if let Some(contour) = self.open.take() {
            self.flush(contour);
        }
        self.current = (target[0], target[1]);
        let mut contour = Contour::new();
        contour.push(self.options.anchor_style.anchor_point(target[0], target[1]));
        self.open = Some(contour);
        Ok(())
    }

    fn line_to(&mut self, cmd: &PathCommand) -> Result<(), PathError> {
        for pair in self.groups(cmd)? {
            let (x, y) = self.resolve(cmd, pair[0], pair[1]);
            self.contour().push(Point::line(x, y));
            self.current = (x, y);
        }
        Ok(())
    }

    fn axis_to(&mut self, cmd: &PathCommand, axis: Axis) -> Result<(), PathError> {
        for value in self.groups(cmd)? {
            let value = value[0];
            let (mut x, mut y) = self.current;
            let coord = match axis {
                Axis::X => &mut x,
                Axis::Y => &mut y,
            };
            if cmd.command.relative {
                *coord += value;
            } else {
                *coord = value;
            }
            self.contour().push(Point::line(x, y));
            self.current = (x, y);
        }
        Ok(())
    }

    fn curve_to(&mut self, cmd: &PathCommand) -> Result<(), PathError> {
        for group in self.groups(cmd)? {
            // Relative control points are all offsets from the segment start
            let c1 = self.resolve(cmd, group[0], group[1]);
            let c2 = self.resolve(cmd, group[2], group[3]);
            let end = self.resolve(cmd, group[4], group[5]);

            let contour = self.contour();
            contour.push(Point::off_curve(c1.0, c1.1));
            contour.push(Point::off_curve(c2.0, c2.1));
            let end_point = Point::curve(end.0, end.1);
            if !contour.is_at_anchor(&end_point) {
                contour.push(end_point);
            }
            self.current = end;
        }
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut contour) = self.open.take() {
            contour.trim_closing_point();
            self.flush(contour);
        }
    }

    fn flush(&mut self, contour: Contour) {
        let points = contour.len();
        if !self.outline.push(contour) {
            debug!("discarding degenerate contour with {} point(s)", points);
        }
    }

    /// The open contour, starting one at the cursor if none is open
    ///
    /// Must be called before the cursor moves to the command's target.
    fn contour(&mut self) -> &mut Contour {
        let (x, y) = self.current;
        let style = self.options.anchor_style;
        self.open.get_or_insert_with(|| {
            let mut contour = Contour::new();
            contour.push(style.anchor_point(x, y));
            contour
        })
    }

    fn resolve(&self, cmd: &PathCommand, x: f64, y: f64) -> (f64, f64) {
        if cmd.command.relative {
            (self.current.0 + x, self.current.1 + y)
        } else {
            (x, y)
        }
    }

    /// Split a command's numbers into whole groups, applying the group policy
    fn groups<'n>(&self, cmd: &'n PathCommand) -> Result<std::slice::ChunksExact<'n, f64>, PathError> {
        let size = cmd.kind().group_size().max(1);
        let found = cmd.numbers.len();
        if found % size != 0 {
            match self.options.group_policy {
                GroupPolicy::Strict => {
                    return Err(PathError::incomplete_group(
                        cmd.letter(),
                        cmd.index,
                        size,
                        found,
                        cmd.span.clone(),
                    ));
                }
                GroupPolicy::Truncate => {
                    warn!(
                        "command {} ('{}'): ignoring {} trailing argument(s)",
                        cmd.index,
                        cmd.letter(),
                        found % size
                    );
                }
            }
        }
        Ok(cmd.numbers.chunks_exact(size))
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Build the outline described by a path-data string
pub fn build_outline(path: &str, options: &BuildOptions) -> Result<Outline, PathError> {
    let mut builder = ContourBuilder::new(*options);
    for cmd in parse_commands(path) {
        builder.apply(&cmd)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::PointKind;
    use pretty_assertions::assert_eq;

    fn build(path: &str) -> Outline {
        build_outline(path, &BuildOptions::default()).unwrap()
    }

    fn positions(contour: &Contour) -> Vec<(f64, f64)> {
        contour.points.iter().map(Point::position).collect()
    }

    #[test]
    fn test_single_point_contour_discarded() {
        assert!(build("M 10 20 Z").is_empty());
        assert!(build("M 10 20").is_empty());
    }

    #[test]
    fn test_two_point_line_contour() {
        let outline = build("M 0 0 L 50 50 Z");
        assert_eq!(outline.len(), 1);
        let contour = &outline.contours[0];
        assert_eq!(positions(contour), vec![(0.0, 0.0), (50.0, 50.0)]);
        assert!(contour.points.iter().all(|p| p.kind == PointKind::Line));
    }

    #[test]
    fn test_square_closing_point_elided() {
        let outline = build("M 0 0 L 100 0 L 100 100 L 0 100 L 0 0 Z");
        assert_eq!(outline.len(), 1);
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]
        );
    }

    #[test]
    fn test_cubic_grouping() {
        let outline = build("M0,0 C10,0 20,10 20,20");
        let contour = &outline.contours[0];
        assert_eq!(contour.len(), 4);
        let kinds: Vec<_> = contour.points.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PointKind::Line,
                PointKind::OffCurve,
                PointKind::OffCurve,
                PointKind::Curve
            ]
        );
        assert!(contour.points[3].smooth);
        assert!(!contour.points[1].smooth);
    }

    #[test]
    fn test_relative_curve_offsets_from_segment_start() {
        let outline = build("M10,10 c0,10 10,10 10,0 Z");
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(10.0, 10.0), (10.0, 20.0), (20.0, 20.0), (20.0, 10.0)]
        );
    }

    #[test]
    fn test_curve_back_to_anchor_suppresses_endpoint() {
        let outline = build("M0,0 C0,50 50,50 50,0 C50,-50 0,-50 0.0001,0 Z");
        let contour = &outline.contours[0];
        assert_eq!(contour.len(), 6);
        assert_eq!(contour.points[5].kind, PointKind::OffCurve);
    }

    #[test]
    fn test_relative_accumulation() {
        let outline = build("m10,10 l5,0 l0,5");
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(10.0, 10.0), (15.0, 10.0), (15.0, 15.0)]
        );
    }

    #[test]
    fn test_relative_move_is_literal() {
        let outline = build("M 100 100 L 110 100 Z m 5 5 l 10 0 z");
        assert_eq!(outline.contours[1].points[0].position(), (5.0, 5.0));
        assert_eq!(outline.contours[1].points[1].position(), (15.0, 5.0));
    }

    #[test]
    fn test_horizontal_vertical() {
        let outline = build("M0,0 H50 V50 Z");
        assert_eq!(outline.len(), 1);
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]
        );
    }

    #[test]
    fn test_relative_horizontal_vertical_repeat() {
        let outline = build("M 10 10 h 5 5 v -20");
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(10.0, 10.0), (15.0, 10.0), (20.0, 10.0), (20.0, -10.0)]
        );
    }

    #[test]
    fn test_multiple_contours_preserve_order() {
        let outline = build("M0 0 L10 0 L10 10 Z M20 20 L30 20 L30 30 Z");
        assert_eq!(outline.len(), 2);
        assert_eq!(outline.contours[0].points[0].position(), (0.0, 0.0));
        assert_eq!(outline.contours[1].points[0].position(), (20.0, 20.0));
    }

    #[test]
    fn test_move_flushes_open_contour() {
        let outline = build("M0 0 L10 0 M5 5 M20 20 L30 30");
        assert_eq!(outline.len(), 2);
        assert_eq!(outline.contours[1].points[0].position(), (20.0, 20.0));
    }

    #[test]
    fn test_smooth_curve_anchor_style() {
        let options = BuildOptions::new().with_anchor_style(AnchorStyle::SmoothCurve);
        let outline = build_outline("M0 0 L10 0 L10 10 Z", &options).unwrap();
        let anchor = outline.contours[0].points[0];
        assert_eq!(anchor.kind, PointKind::Curve);
        assert!(anchor.smooth);
        assert_eq!(outline.contours[0].points[1].kind, PointKind::Line);
    }

    #[test]
    fn test_truncate_drops_partial_group() {
        let outline = build("M0 0 L10 10 20");
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(0.0, 0.0), (10.0, 10.0)]
        );
    }

    #[test]
    fn test_strict_reports_partial_group() {
        let options = BuildOptions::new().with_strict(true);
        let err = build_outline("M0 0 C1 1 2 2 3", &options).unwrap_err();
        assert_eq!(err, PathError::incomplete_group('C', 1, 6, 5, 5..15));
    }

    #[test]
    fn test_drawing_after_close_opens_contour_at_cursor() {
        let outline = build("M0 0 L10 0 L10 10 Z L20 10 L20 20");
        assert_eq!(outline.len(), 2);
        assert_eq!(
            positions(&outline.contours[1]),
            vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]
        );
    }

    #[test]
    fn test_drawing_before_move_anchors_at_origin() {
        let outline = build("L5 5 L6 6");
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(0.0, 0.0), (5.0, 5.0), (6.0, 6.0)]
        );
    }

    #[test]
    fn test_axis_after_close_anchors_at_cursor() {
        let outline = build("M0 0 L 1 1 Z H 2 V 3");
        assert_eq!(outline.len(), 2);
        assert_eq!(
            positions(&outline.contours[1]),
            vec![(1.0, 1.0), (2.0, 1.0), (2.0, 3.0)]
        );
    }

    #[test]
    fn test_negative_coordinates_keep_contour() {
        let outline = build("M 10 10 L 20 -20 L 0 -5 Z");
        assert_eq!(outline.len(), 1);
        assert_eq!(
            positions(&outline.contours[0]),
            vec![(10.0, 10.0), (20.0, -20.0), (0.0, -5.0)]
        );
    }

    #[test]
    fn test_empty_path() {
        assert!(build("").is_empty());
    }

    #[test]
    fn test_builder_tracks_cursor() {
        let mut builder = ContourBuilder::new(BuildOptions::default());
        for cmd in parse_commands("M1 2 l3 4") {
            builder.apply(&cmd).unwrap();
        }
        assert_eq!(builder.current_position(), (4.0, 6.0));
        assert_eq!(builder.finish().point_count(), 2);
    }
}
