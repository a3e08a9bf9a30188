//! Geometry for the line drawn from an integration node to the central hub.

use dioxus::prelude::MountedData;

/// Axis-aligned box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A line positioned inside the visual's container: starts at the node
/// centre and is rotated to point at the hub centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorLine {
    pub left: f64,
    pub top: f64,
    pub length: f64,
    pub angle_deg: f64,
}

impl ConnectorLine {
    pub fn between(node: Bounds, hub: Bounds, container: Bounds) -> Self {
        let (nx, ny) = node.center();
        let (hx, hy) = hub.center();
        let x1 = nx - container.left;
        let y1 = ny - container.top;
        let x2 = hx - container.left;
        let y2 = hy - container.top;
        let (dx, dy) = (x2 - x1, y2 - y1);

        Self {
            left: x1,
            top: y1,
            length: dx.hypot(dy),
            angle_deg: dy.atan2(dx).to_degrees(),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {:.1}px; left: {:.1}px; top: {:.1}px; transform: rotate({:.2}deg); transform-origin: 0 0;",
            self.length, self.left, self.top, self.angle_deg
        )
    }
}

/// Viewport rectangle of a mounted element, if the renderer can provide one.
pub async fn measure(element: &MountedData) -> Option<Bounds> {
    match element.get_client_rect().await {
        Ok(rect) => Some(Bounds::new(
            rect.origin.x,
            rect.origin.y,
            rect.size.width,
            rect.size.height,
        )),
        Err(err) => {
            tracing::debug!("[connectors] element could not be measured: {err:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn horizontal_line_points_right() {
        let container = Bounds::new(100.0, 50.0, 400.0, 400.0);
        let node = Bounds::new(100.0, 240.0, 20.0, 20.0);
        let hub = Bounds::new(290.0, 230.0, 40.0, 40.0);
        let line = ConnectorLine::between(node, hub, container);
        assert!(close(line.left, 10.0));
        assert!(close(line.top, 200.0));
        assert!(close(line.length, 200.0));
        assert!(close(line.angle_deg, 0.0));
    }

    #[test]
    fn diagonal_line_angle_and_length() {
        let container = Bounds::new(0.0, 0.0, 500.0, 500.0);
        let node = Bounds::new(0.0, 0.0, 0.0, 0.0);
        let hub = Bounds::new(30.0, 40.0, 0.0, 0.0);
        let line = ConnectorLine::between(node, hub, container);
        assert!(close(line.length, 50.0));
        assert!(close(line.angle_deg, 53.13010235415598));

        let back = ConnectorLine::between(hub, node, container);
        assert!(close(back.angle_deg, -126.86989764584402));
        assert!(line.style().contains("width: 50.0px"));
    }
}
