// Draws the house, writes casa.png and keeps it around for a few seconds.
casa::main!();
