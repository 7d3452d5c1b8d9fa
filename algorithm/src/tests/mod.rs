mod test_track_index;
