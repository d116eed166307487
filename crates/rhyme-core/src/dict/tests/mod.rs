mod cmu;
