mod euler;
mod unbalanced;
