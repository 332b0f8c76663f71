//! Fixed hemisphere sampling kernel.
//!
//! The directions are the upper-hemisphere vertices of a subdivided icosphere.
//! Unlike a UV sphere the icosphere keeps its vertices close to
//! evenly spaced, so the kernel has no clustering around the pole. The table
//! is baked once; its order is part of the output and must not change between
//! bakes.

use crate::math::Vec3;

pub const KERNEL_SAMPLES: usize = 73;

/// Unit directions over the local +Z hemisphere
#[rustfmt::skip]
pub const KERNEL: [Vec3; KERNEL_SAMPLES] = [
    [0.0, -0.525731086730957, 0.8506507873535156],
    [0.0, 0.525731086730957, 0.8506507873535156],
    [0.8506507873535156, 0.0, 0.525731086730957],
    [-0.8506507873535156, 0.0, 0.525731086730957],
    [-0.80901700258255, 0.5, 0.30901700258255005],
    [-0.5, 0.30901700258255005, 0.80901700258255],
    [-0.30901700258255005, 0.80901700258255, 0.5],
    [0.30901700258255005, 0.80901700258255, 0.5],
    [-0.80901700258255, -0.5, 0.30901700258255005],
    [-0.5, -0.30901700258255005, 0.80901700258255],
    [0.0, 0.0, 1.0],
    [0.5, 0.30901700258255005, 0.80901700258255],
    [0.80901700258255, 0.5, 0.30901700258255005],
    [0.80901700258255, -0.5, 0.30901700258255005],
    [0.5, -0.30901700258255005, 0.80901700258255],
    [0.30901700258255005, -0.80901700258255, 0.5],
    [-0.30901700258255005, -0.80901700258255, 0.5],
    [-0.6817183494567871, 0.7165669202804565, 0.14762090146541595],
    [-0.5877852439880371, 0.6881909370422363, 0.4253253936767578],
    [-0.44286268949508667, 0.8641878366470337, 0.23885564506053925],
    [-0.7165669202804565, 0.14762090146541595, 0.6817183494567871],
    [-0.6881909370422363, 0.4253253936767578, 0.5877852439880371],
    [-0.8641878366470337, 0.23885564506053925, 0.44286268949508667],
    [-0.14762090146541595, 0.6817183494567871, 0.7165669202804565],
    [-0.4253253936767578, 0.5877852439880371, 0.6881909370422363],
    [-0.23885564506053925, 0.44286268949508667, 0.8641878366470337],
    [-0.1624598503112793, 0.9510565400123596, 0.2628655433654785],
    [0.14762090146541595, 0.6817183494567871, 0.7165669202804565],
    [0.0, 0.8506507873535156, 0.5257311463356018],
    [0.1624598503112793, 0.9510565400123596, 0.2628655433654785],
    [0.44286268949508667, 0.8641878366470337, 0.23885564506053925],
    [-0.9510565400123596, 0.2628655433654785, 0.1624598503112793],
    [-0.955422580242157, 0.0, 0.2952418029308319],
    [-0.9510565400123596, -0.2628655433654785, 0.1624598503112793],
    [-0.8641878366470337, -0.23885564506053925, 0.44286268949508667],
    [-0.6817183494567871, -0.7165669202804565, 0.14762090146541595],
    [-0.2628655433654785, 0.1624598503112793, 0.9510565400123596],
    [0.0, 0.2952418029308319, 0.955422580242157],
    [-0.7165669202804565, -0.14762090146541595, 0.6817183494567871],
    [-0.5257311463356018, 0.0, 0.8506507873535156],
    [0.0, -0.2952418029308319, 0.955422580242157],
    [-0.2628655433654785, -0.1624598503112793, 0.9510565400123596],
    [-0.23885564506053925, -0.44286268949508667, 0.8641878366470337],
    [0.5877852439880371, 0.6881909370422363, 0.4253253936767578],
    [0.6817183494567871, 0.7165669202804565, 0.14762090146541595],
    [0.23885564506053925, 0.44286268949508667, 0.8641878366470337],
    [0.4253253936767578, 0.5877852439880371, 0.6881909370422363],
    [0.8641878366470337, 0.23885564506053925, 0.44286268949508667],
    [0.6881909370422363, 0.4253253936767578, 0.5877852439880371],
    [0.7165669202804565, 0.14762090146541595, 0.6817183494567871],
    [0.6817183494567871, -0.7165669202804565, 0.14762090146541595],
    [0.5877852439880371, -0.6881909370422363, 0.4253253936767578],
    [0.44286268949508667, -0.8641878366470337, 0.23885564506053925],
    [0.7165669202804565, -0.14762090146541595, 0.6817183494567871],
    [0.6881909370422363, -0.4253253936767578, 0.5877852439880371],
    [0.8641878366470337, -0.23885564506053925, 0.44286268949508667],
    [0.14762090146541595, -0.6817183494567871, 0.7165669202804565],
    [0.4253253936767578, -0.5877852439880371, 0.6881909370422363],
    [0.23885564506053925, -0.44286268949508667, 0.8641878366470337],
    [0.1624598503112793, -0.9510565400123596, 0.2628655433654785],
    [-0.14762090146541595, -0.6817183494567871, 0.7165669202804565],
    [0.0, -0.8506507873535156, 0.5257311463356018],
    [-0.1624598503112793, -0.9510565400123596, 0.2628655433654785],
    [-0.44286268949508667, -0.8641878366470337, 0.23885564506053925],
    [0.9510565400123596, -0.2628655433654785, 0.1624598503112793],
    [0.955422580242157, 0.0, 0.2952418029308319],
    [0.9510565400123596, 0.2628655433654785, 0.1624598503112793],
    [0.2628655433654785, -0.1624598503112793, 0.9510565400123596],
    [0.5257311463356018, 0.0, 0.8506507873535156],
    [0.2628655433654785, 0.1624598503112793, 0.9510565400123596],
    [-0.5877852439880371, -0.6881909370422363, 0.4253253936767578],
    [-0.4253253936767578, -0.5877852439880371, 0.6881909370422363],
    [-0.6881909370422363, -0.4253253936767578, 0.5877852439880371],
];
