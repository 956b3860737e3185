//! Three dimensional vectors used for directions and magnetic fields.
//!
//! Every operation returns a new [`Vector3D`], values are never mutated in place.

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("axis has to be x, y or z, got '{0}'")]
    InvalidAxis(String),

    #[error("plane has to be xy, xz or yz, got '{0}'")]
    InvalidPlane(String),

    #[error("division of a vector by zero")]
    DivideByZero,
}

/// Principal axis of the cartesian frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            _ => Err(VectorError::InvalidAxis(s.to_string())),
        }
    }
}

/// Principal plane of the cartesian frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl FromStr for Plane {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xy" | "XY" => Ok(Plane::XY),
            "xz" | "XZ" => Ok(Plane::XZ),
            "yz" | "YZ" => Ok(Plane::YZ),
            _ => Err(VectorError::InvalidPlane(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Canonical basis vector along `axis`.
    pub fn unit_vector(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::new(1., 0., 0.),
            Axis::Y => Self::new(0., 1., 0.),
            Axis::Z => Self::new(0., 0., 1.),
        }
    }

    pub fn components(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Component-wise division, fails only for an exactly zero divisor.
    pub fn divide(&self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0. {
            return Err(VectorError::DivideByZero);
        }

        Ok(Self::new(self.x / scalar, self.y / scalar, self.z / scalar))
    }

    pub fn length(&self) -> f64 {
        self.scalar_product(self).sqrt()
    }

    pub fn normalize(&self) -> Result<Self, VectorError> {
        self.divide(self.length())
    }

    pub fn scalar_product(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross_product(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between `self` and `other` in radians, in `[0, π]`.
    pub fn angle(&self, other: &Self) -> Result<f64, VectorError> {
        let norm = self.length() * other.length();
        if norm == 0. {
            return Err(VectorError::DivideByZero);
        }

        Ok((self.scalar_product(other) / norm).clamp(-1., 1.).acos())
    }

    /// Rotates `self` by `angle` radians around `axis` using the Rodrigues formula,
    /// positive angles rotate right-handed.
    ///
    /// The axis can have arbitrary nonzero length.
    pub fn rotate(&self, axis: &Self, angle: f64) -> Result<Self, VectorError> {
        let u = axis.normalize()?;

        Ok(self.rotate_unit(&u, angle))
    }

    pub fn rotate_axis(&self, axis: Axis, angle: f64) -> Self {
        self.rotate_unit(&Self::unit_vector(axis), angle)
    }

    fn rotate_unit(&self, u: &Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let one_cos = 1. - cos;

        let x = (cos + u.x * u.x * one_cos) * self.x
            + (u.x * u.y * one_cos - u.z * sin) * self.y
            + (u.x * u.z * one_cos + u.y * sin) * self.z;
        let y = (u.y * u.x * one_cos + u.z * sin) * self.x
            + (cos + u.y * u.y * one_cos) * self.y
            + (u.y * u.z * one_cos - u.x * sin) * self.z;
        let z = (u.z * u.x * one_cos - u.y * sin) * self.x
            + (u.z * u.y * one_cos + u.x * sin) * self.y
            + (cos + u.z * u.z * one_cos) * self.z;

        Self::new(x, y, z)
    }

    /// Zeroes the component orthogonal to `plane`.
    pub fn project(&self, plane: Plane) -> Self {
        match plane {
            Plane::XY => Self::new(self.x, self.y, 0.),
            Plane::XZ => Self::new(self.x, 0., self.z),
            Plane::YZ => Self::new(0., self.y, self.z),
        }
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3D <{}, {}, {}>", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(value: Vector3D) -> Self {
        value.to_array()
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3D::add(&self, &rhs)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        self.scale(-1.)
    }
}
