use iced::border::Radius;
use iced::window::Direction;
use iced::Padding;
use otty_chrome::{CornerGeometry, Point, ResizeDirection, Size, Thickness};

pub(crate) fn chrome_point(point: iced::Point) -> Point {
    Point::new(f64::from(point.x), f64::from(point.y))
}

pub(crate) fn iced_point(point: Point) -> iced::Point {
    iced::Point::new(point.x as f32, point.y as f32)
}

pub(crate) fn chrome_size(size: iced::Size) -> Size {
    Size::new(f64::from(size.width), f64::from(size.height))
}

pub(crate) fn padding(thickness: Thickness) -> Padding {
    Padding {
        top: thickness.top as f32,
        right: thickness.right as f32,
        bottom: thickness.bottom as f32,
        left: thickness.left as f32,
    }
}

pub(crate) fn radius(corners: CornerGeometry) -> Radius {
    Radius {
        top_left: corners.top_left as f32,
        top_right: corners.top_right as f32,
        bottom_right: corners.bottom_right as f32,
        bottom_left: corners.bottom_left as f32,
    }
}

pub(crate) fn direction(direction: ResizeDirection) -> Direction {
    match direction {
        ResizeDirection::North => Direction::North,
        ResizeDirection::South => Direction::South,
        ResizeDirection::East => Direction::East,
        ResizeDirection::West => Direction::West,
        ResizeDirection::NorthEast => Direction::NorthEast,
        ResizeDirection::NorthWest => Direction::NorthWest,
        ResizeDirection::SouthEast => Direction::SouthEast,
        ResizeDirection::SouthWest => Direction::SouthWest,
    }
}
