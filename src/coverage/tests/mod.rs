mod greedy;
mod selector;
