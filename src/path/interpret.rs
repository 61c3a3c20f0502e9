use super::flatten::{self, Arc};
use super::{Command, Token};
use crate::errors::{Found, InterpretError, Result};
use crate::geometry::Point;
use crate::quality::PolygonConfig;

use tracing::{debug, trace};

/// Interpreter-local drawing state; lives only for one evaluation.
#[derive(Debug, Clone, Copy, Default)]
struct CursorState {
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // second control point of the last cubic, or control point of the
    // last quadratic; only meaningful as given by `last_command`
    last_control: Point,
    last_command: Option<Command>,
}

/// Expands a token sequence into absolute path-space points.
pub struct PathInterpreter {
    tokens: Vec<(usize, Token)>,
    index: usize,
    state: CursorState,
    config: PolygonConfig,
    points: Vec<Point>,
}

impl PathInterpreter {
    pub fn new(tokens: Vec<(usize, Token)>, config: &PolygonConfig) -> Self {
        Self {
            tokens,
            index: 0,
            state: CursorState::default(),
            config: *config,
            points: Vec::new(),
        }
    }

    fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn at_number(&self) -> bool {
        matches!(self.tokens.get(self.index), Some((_, Token::Number(_))))
    }

    fn read_command(&mut self) -> Result<Command> {
        match self.tokens.get(self.index) {
            Some(&(_, Token::Command(command))) => {
                self.index += 1;
                Ok(command)
            }
            Some(&(index, Token::Number(value))) => {
                Err(InterpretError::ExpectedCommand { value, index }.into())
            }
            None => Err(InterpretError::Empty.into()),
        }
    }

    /// Consume one fixed-arity operand group for `command`.
    fn read_operands(&mut self, command: Command) -> Result<Vec<f64>> {
        let names = command.operands();
        let mut args = Vec::with_capacity(names.len());
        for (pos, &operand) in names.iter().enumerate() {
            match self.tokens.get(self.index) {
                Some(&(_, Token::Number(value))) => {
                    self.index += 1;
                    args.push(value);
                }
                other => {
                    let found = match other {
                        Some(&(index, Token::Command(c))) => Found::Command {
                            letter: c.letter(),
                            index,
                        },
                        _ => Found::End,
                    };
                    return Err(InterpretError::MissingOperand {
                        command: command.letter(),
                        operand,
                        position: pos + 1,
                        arity: names.len(),
                        found,
                    }
                    .into());
                }
            }
        }
        Ok(args)
    }

    fn emit(&mut self, point: Point) {
        self.points.push(point);
        self.state.position = point;
    }

    fn emit_all(&mut self, points: Vec<Point>, end: Point) {
        self.points.extend(points);
        self.state.position = end;
    }

    /// Apply a single operand group, updating the cursor and emitting points.
    fn execute(&mut self, command: Command, args: &[f64]) {
        let current = self.state.position;
        let target = |x: f64, y: f64| {
            if command.is_relative() {
                current + Point::new(x, y)
            } else {
                Point::new(x, y)
            }
        };
        let before = self.points.len();

        match command {
            Command::MoveTo { .. } => {
                let xy = target(args[0], args[1]);
                self.state.subpath_start = xy;
                self.emit(xy);
            }
            Command::LineTo { .. } => self.emit(target(args[0], args[1])),
            Command::Horizontal { relative } => {
                let x = if relative { current.x + args[0] } else { args[0] };
                self.emit(Point::new(x, current.y));
            }
            Command::Vertical { relative } => {
                let y = if relative { current.y + args[0] } else { args[0] };
                self.emit(Point::new(current.x, y));
            }
            Command::Cubic { .. } => {
                let cp1 = target(args[0], args[1]);
                let cp2 = target(args[2], args[3]);
                let end = target(args[4], args[5]);
                let points = flatten::cubic(current, cp1, cp2, end, self.config.curve_segments);
                self.emit_all(points, end);
                self.state.last_control = cp2;
            }
            Command::SmoothCubic { .. } => {
                // "The first control point is assumed to be the reflection of the second
                //  control point on the previous command relative to the current point.
                //  If there is no previous command or if the previous command was not an
                //  C, c, S or s, assume the first control point is coincident with the
                //  current point."
                let cp1 = match self.state.last_command {
                    Some(prev) if prev.is_cubic() => current.reflect(self.state.last_control),
                    _ => current,
                };
                let cp2 = target(args[0], args[1]);
                let end = target(args[2], args[3]);
                let points = flatten::cubic(current, cp1, cp2, end, self.config.curve_segments);
                self.emit_all(points, end);
                self.state.last_control = cp2;
            }
            Command::Quadratic { .. } => {
                let cp = target(args[0], args[1]);
                let end = target(args[2], args[3]);
                let points = flatten::quadratic(current, cp, end, self.config.curve_segments);
                self.emit_all(points, end);
                self.state.last_control = cp;
            }
            Command::SmoothQuadratic { .. } => {
                // "The control point is assumed to be the reflection of the control point
                //  on the previous command relative to the current point. (If there is no
                //  previous command or if the previous command was not a Q, q, T or t,
                //  assume the control point is coincident with the current point.)"
                let cp = match self.state.last_command {
                    Some(prev) if prev.is_quadratic() => current.reflect(self.state.last_control),
                    _ => current,
                };
                let end = target(args[0], args[1]);
                let points = flatten::quadratic(current, cp, end, self.config.curve_segments);
                self.emit_all(points, end);
                self.state.last_control = cp;
            }
            Command::Arc { .. } => {
                // "(rx ry x-axis-rotation large-arc-flag sweep-flag x y)+"
                let end = target(args[5], args[6]);
                let arc = Arc {
                    start: current,
                    end,
                    rx: args[0],
                    ry: args[1],
                    rotation: args[2],
                    large_arc: args[3] != 0.,
                    sweep: args[4] != 0.,
                };
                self.emit_all(arc.flatten(self.config.arc_segments), end);
            }
            Command::Close => {
                let start = self.state.subpath_start;
                if current != start {
                    self.emit(start);
                }
            }
        }
        self.state.last_command = Some(command);
        trace!(%command, points = self.points.len() - before, "path command");
    }

    /// Run all tokens, returning the absolute points in traversal order.
    pub fn evaluate(mut self) -> Result<Vec<Point>> {
        if self.tokens.is_empty() {
            return Err(InterpretError::Empty.into());
        }
        let mut groups = 0;
        while !self.at_end() {
            let command = self.read_command()?;
            let args = self.read_operands(command)?;
            self.execute(command, &args);
            groups += 1;
            if command == Command::Close {
                // 'Z' takes no operands, so never repeats.
                continue;
            }
            // "The command letter can be eliminated on subsequent commands if the
            // same command is used multiple times in a row". A moveto followed by
            // further pairs repeats as a lineto of the same case.
            let repeat = command.repeated();
            while self.at_number() {
                let args = self.read_operands(command)?;
                self.execute(repeat, &args);
                groups += 1;
            }
        }
        debug!(groups, points = self.points.len(), "path interpreted");
        Ok(self.points)
    }
}

/// Interpret indexed tokens into absolute path-space points.
pub fn interpret(tokens: Vec<(usize, Token)>, config: &PolygonConfig) -> Result<Vec<Point>> {
    PathInterpreter::new(tokens, config).evaluate()
}
