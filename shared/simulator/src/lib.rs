pub mod animation;
pub mod arena;
pub mod audio;
pub mod editor;
pub mod effect;
pub mod factory;
pub mod game;
pub mod graphics;
pub mod gunner;
pub mod index_set;
pub mod level;
pub mod navigator;
pub mod path;
pub mod persist;
pub mod pickable;
pub mod rng;
pub mod scenery;
pub mod ship;
pub mod shot;
pub mod sprite;
pub mod sync;
pub mod timer;
pub mod weapon;
