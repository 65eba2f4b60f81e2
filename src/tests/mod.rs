mod depth_first;
mod point;
